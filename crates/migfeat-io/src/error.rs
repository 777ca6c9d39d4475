//! Errors for dataset file operations

use thiserror::Error;

/// Errors that can occur while reading or writing dataset files
#[derive(Debug, Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to open file: {0}")]
    OpenFailed(String),

    #[error("Write failed: {0}")]
    Write(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Row width mismatch: expected {expected}, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },
}

/// Result type for dataset file operations
pub type IoResult<T> = Result<T, IoError>;
