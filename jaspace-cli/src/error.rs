//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// Configuration error
    ConfigError(String),
    /// File is not valid UTF-8
    NotUtf8 {
        /// Offending file
        path: String,
        /// Length of the valid prefix
        valid_up_to: usize,
    },
    /// `--check` found files that would be rewritten
    ChangesPending(usize),
    /// Some files could not be written back
    WriteFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::NotUtf8 { path, valid_up_to } => {
                write!(f, "Not UTF-8: {path} (invalid byte at {valid_up_to})")
            }
            CliError::ChangesPending(files) => {
                write!(f, "{files} file(s) need boundary spacing")
            }
            CliError::WriteFailed(files) => write!(f, "Failed to write {files} file(s)"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
