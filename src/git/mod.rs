/*!
 * Git repository handling functionality
 */

mod error;
mod progress;
mod repository;
mod url;

pub use error::{GitError, GitResult};
pub use progress::{GitProgress, ProgressReporter};
pub use repository::{ClonedRepository, TEMP_PREFIX};
pub use url::{is_git_url, parse_git_url, GitHost, GitRepoInfo};

/// Clone a remote repository into a self-cleaning temporary directory
pub fn clone_repository<P: ProgressReporter>(
    url: &str,
    progress: Option<&P>,
) -> GitResult<ClonedRepository> {
    let info = parse_git_url(url)?;
    ClonedRepository::clone(info, progress)
}
