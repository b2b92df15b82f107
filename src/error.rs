use std::path::{Path, PathBuf};

use thiserror::Error;

/// Error types for bot client operations
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid Telegram JSON
    #[error("Invalid response: {0}")]
    Json(#[from] serde_json::Error),

    /// Local I/O error while reading an attachment
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Attachment path does not point at a regular file
    #[error("File does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Argument rejected before reaching the network
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Numeric chat action kind outside 1..=7
    #[error("Invalid chat action kind: {0}")]
    InvalidActionKind(u8),
}

impl Error {
    /// Create a new configuration error
    pub fn configuration<S: AsRef<str>>(message: S) -> Self {
        Error::Configuration(message.as_ref().to_string())
    }

    /// Create a new file-not-found error
    pub fn file_not_found<P: AsRef<Path>>(path: P) -> Self {
        Error::FileNotFound(path.as_ref().to_path_buf())
    }

    /// Create a new invalid argument error
    pub fn invalid_argument<S: AsRef<str>>(message: S) -> Self {
        Error::InvalidArgument(message.as_ref().to_string())
    }
}
