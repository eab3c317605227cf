//! Core error types

use thiserror::Error;

/// Errors raised by the core.
///
/// The transform itself is total; only turning raw bytes into text can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Input is not valid UTF-8
    #[error("invalid UTF-8 at byte {valid_up_to}")]
    InvalidUtf8 {
        /// Length of the longest valid UTF-8 prefix
        valid_up_to: usize,
    },
}

impl From<std::str::Utf8Error> for CoreError {
    fn from(err: std::str::Utf8Error) -> Self {
        CoreError::InvalidUtf8 {
            valid_up_to: err.valid_up_to(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
