//! Error types for schooldoc library.
//!
//! The extraction core never fails; these errors only come from the outer
//! surfaces (option validation, batch thread pools, file IO and rendering).

use std::io;
use thiserror::Error;

/// Result type alias for schooldoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur around document processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input text or writing reports.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error during report rendering (Markdown, text).
    #[error("Rendering error: {0}")]
    Render(String),

    /// A configuration value is out of range.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// The batch worker pool could not be built.
    #[error("Thread pool error: {0}")]
    ThreadPool(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(err.to_string())
    }
}
