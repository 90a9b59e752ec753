//! Error types for pipeline I/O operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for pipeline I/O operations.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing pipeline files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// The feature sidecar does not have the expected
    /// `curves`/`vert_indices` structure.
    #[error("malformed feature file: {message}")]
    MalformedFeature {
        /// Description of the structural problem.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Create a `MalformedFeature` error with the given message.
    #[must_use]
    pub fn malformed_feature(message: impl Into<String>) -> Self {
        Self::MalformedFeature {
            message: message.into(),
        }
    }
}

/// Map `File::open` failures, distinguishing a missing file from other
/// I/O problems.
pub(crate) fn open_error(path: &std::path::Path, err: std::io::Error) -> IoError {
    if err.kind() == std::io::ErrorKind::NotFound {
        IoError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IoError::Io(err)
    }
}
