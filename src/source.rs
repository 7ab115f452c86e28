/*!
 * Resolving the input to a directory on local disk
 */

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::git::{self, ClonedRepository, ProgressReporter};

/// Where the traversal root lives
#[derive(Debug)]
pub enum Source {
    /// A directory given on the command line, used as-is
    Local(PathBuf),
    /// A repository cloned into a temporary directory, removed on drop
    Remote(ClonedRepository),
}

impl Source {
    /// Clone `input` when it is a repository URL, otherwise treat it as a path
    pub fn resolve<P: ProgressReporter>(input: &str, progress: Option<&P>) -> Result<Self> {
        if git::is_git_url(input) {
            tracing::info!(target: "code2text", url = input, "cloning repository");
            let repo = git::clone_repository(input, progress)?;
            Ok(Source::Remote(repo))
        } else {
            Ok(Source::Local(PathBuf::from(input)))
        }
    }

    /// Root directory to traverse
    pub fn root(&self) -> &Path {
        match self {
            Source::Local(path) => path,
            Source::Remote(repo) => repo.path(),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Source::Remote(_))
    }
}
