/*!
 * Cloning remote repositories into temporary directories
 */

use std::path::Path;

use git2::{FetchOptions, RemoteCallbacks};
use tempfile::TempDir;

use super::error::{GitError, GitResult};
use super::progress::{GitProgress, ProgressReporter};
use super::url::GitRepoInfo;

/// Prefix of the temporary directories clones land in
pub const TEMP_PREFIX: &str = "code2text_repo_";

/// A repository checked out into a temporary directory.
///
/// The directory is removed when the value is dropped.
#[derive(Debug)]
pub struct ClonedRepository {
    dir: TempDir,
    info: GitRepoInfo,
}

impl ClonedRepository {
    /// Clone `info.url` into a fresh temporary directory
    pub fn clone<P: ProgressReporter>(info: GitRepoInfo, progress: Option<&P>) -> GitResult<Self> {
        let dir = tempfile::Builder::new()
            .prefix(TEMP_PREFIX)
            .tempdir()
            .map_err(GitError::IoError)?;

        let mut builder = git2::build::RepoBuilder::new();

        if let Some(reporter) = progress {
            let mut callbacks = RemoteCallbacks::new();
            callbacks.transfer_progress(|stats| {
                reporter.report(&GitProgress::from_stats(&stats));
                true
            });

            let mut fetch_options = FetchOptions::new();
            fetch_options.remote_callbacks(callbacks);
            builder.fetch_options(fetch_options);
        }

        // `dir` drops (and is removed) if this fails
        builder
            .clone(&info.url, dir.path())
            .map_err(GitError::CloneError)?;

        tracing::info!(target: "code2text", repo = %info, "Repository cloned successfully");

        Ok(Self { dir, info })
    }

    /// Repository information
    pub fn info(&self) -> &GitRepoInfo {
        &self.info
    }

    /// Root of the working tree
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
