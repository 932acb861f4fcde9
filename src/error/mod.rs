//! Error types for splitrs.

use std::fmt;
use std::path::PathBuf;

/// Errors that can occur during a split run.
#[derive(Debug)]
pub enum SplitError {
    /// An input argument or configuration value was rejected before any
    /// output was produced.
    InvalidArgument {
        /// Description of what was invalid.
        message: String,
    },

    /// The input file does not exist.
    InputNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// An I/O error occurred while reading the input or writing a part.
    Io(std::io::Error),
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::InvalidArgument { message } => {
                write!(f, "invalid argument: {}", message)
            }
            SplitError::InputNotFound { path } => {
                write!(f, "input file not found: {}", path.display())
            }
            SplitError::Io(e) => write!(f, "io error: {}", e),
        }
    }
}

impl std::error::Error for SplitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SplitError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SplitError {
    fn from(e: std::io::Error) -> Self {
        SplitError::Io(e)
    }
}
