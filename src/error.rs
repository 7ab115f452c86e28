//! Global error handling for code2text
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::git::GitError;

/// Global error type for code2text operations
#[derive(Error, Debug)]
pub enum Code2TextError {
    /// The root (or a directory below it) could not be enumerated
    #[error("Traversal failure at {}: {source}", .path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A single file could not be read or decoded as text
    #[error("Couldn't process {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors, raised before any traversal starts
    #[error("Configuration error: {0}")]
    Config(String),

    /// Git-related errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// File system errors outside of traversal (writing the output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Errors while packaging a .docx archive
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl Code2TextError {
    /// Wrap an IO error raised while enumerating `path`
    pub fn traversal(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Traversal {
            path: path.into(),
            source,
        }
    }

    /// Wrap an IO error raised while reading `path`
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }
}

/// Specialized Result type for code2text operations
pub type Result<T> = std::result::Result<T, Code2TextError>;

/// Creates a Code2TextError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::Code2TextError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Lets `main` keep returning io::Result
impl From<Code2TextError> for io::Error {
    fn from(err: Code2TextError) -> Self {
        match err {
            Code2TextError::Io(e) => e,
            other => {
                let kind = match &other {
                    Code2TextError::Traversal { source, .. }
                    | Code2TextError::FileRead { source, .. } => source.kind(),
                    _ => io::ErrorKind::Other,
                };
                io::Error::new(kind, other.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_macro_formats_message() {
        let err = error!(Config, "Invalid output type: {}", "pdf");
        assert_eq!(err.to_string(), "Configuration error: Invalid output type: pdf");
    }

    #[test]
    fn test_ensure_bails_on_false() {
        fn check(value: &str) -> Result<()> {
            ensure!(!value.is_empty(), Config, "Input path cannot be empty.");
            Ok(())
        }

        assert!(check("src").is_ok());
        assert!(matches!(check(""), Err(Code2TextError::Config(_))));
    }

    #[test]
    fn test_traversal_error_keeps_kind_when_converted() {
        let err = Code2TextError::traversal(
            "missing",
            io::Error::new(io::ErrorKind::NotFound, "no such directory"),
        );
        assert!(err.to_string().starts_with("Traversal failure at missing"));

        let io_err: io::Error = err.into();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }
}
