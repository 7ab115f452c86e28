/*!
 * Diagnostic reporting
 *
 * The traversal components never print. They hand `Diagnostic`s to a sink,
 * which the binary backs with `tracing` and tests replace with a closure.
 */

use std::fmt;
use std::path::PathBuf;

/// Something worth telling the user about while a document is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The rendered folder structure
    FileTree(String),
    /// A file skipped by the hidden-path rule
    HiddenSkipped(PathBuf),
    /// A file skipped because no suffix matched
    ExtensionSkipped(PathBuf),
    /// A qualifying file about to be read
    Processing(PathBuf),
    /// A qualifying file that could not be read and was left out
    ReadFailed { path: PathBuf, reason: String },
}

impl Diagnostic {
    /// Whether the diagnostic reports a problem rather than progress
    pub fn is_warning(&self) -> bool {
        matches!(self, Diagnostic::ReadFailed { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::FileTree(tree) => write!(f, "The file tree to be processed:\n {}", tree),
            Diagnostic::HiddenSkipped(path) => write!(f, "Ignoring hidden file {}", path.display()),
            Diagnostic::ExtensionSkipped(path) => write!(
                f,
                "Skipping file {} due to unmatched extension",
                path.display()
            ),
            Diagnostic::Processing(path) => write!(f, "Processing: {}", path.display()),
            Diagnostic::ReadFailed { path, reason } => {
                write!(f, "Couldn't process {}: {}", path.display(), reason)
            }
        }
    }
}

/// Receives diagnostics from the traversal components
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Diagnostic) + Send + Sync,
{
    fn emit(&self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        if diagnostic.is_warning() {
            tracing::warn!(target: "code2text", "{}", diagnostic);
        } else {
            tracing::info!(target: "code2text", "{}", diagnostic);
        }
    }
}

/// Drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_messages() {
        let path = PathBuf::from("proj/a.txt");
        assert_eq!(
            Diagnostic::ExtensionSkipped(path.clone()).to_string(),
            "Skipping file proj/a.txt due to unmatched extension"
        );
        assert_eq!(
            Diagnostic::HiddenSkipped(path.clone()).to_string(),
            "Ignoring hidden file proj/a.txt"
        );
        assert_eq!(
            Diagnostic::Processing(path.clone()).to_string(),
            "Processing: proj/a.txt"
        );
        assert_eq!(
            Diagnostic::ReadFailed {
                path,
                reason: "stream did not contain valid UTF-8".to_string()
            }
            .to_string(),
            "Couldn't process proj/a.txt: stream did not contain valid UTF-8"
        );
    }

    #[test]
    fn test_only_read_failures_are_warnings() {
        assert!(Diagnostic::ReadFailed {
            path: PathBuf::new(),
            reason: String::new()
        }
        .is_warning());
        assert!(!Diagnostic::FileTree(String::new()).is_warning());
    }

    #[test]
    fn test_closure_sink() {
        let seen = Mutex::new(Vec::new());
        let sink = |d: &Diagnostic| seen.lock().unwrap().push(d.to_string());

        sink.emit(&Diagnostic::Processing(PathBuf::from("x.py")));
        SilentSink.emit(&Diagnostic::Processing(PathBuf::from("y.py")));

        assert_eq!(*seen.lock().unwrap(), vec!["Processing: x.py".to_string()]);
    }
}
