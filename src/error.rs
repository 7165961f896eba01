//! Global error handling for monofile
//!
//! This module provides a centralized error type that can represent errors
//! from all modules in the project.

use std::io;
use thiserror::Error;

/// Global error type for monofile operations
#[derive(Error, Debug)]
pub enum Error {
    /// Archive could not be opened or decompressed
    #[error("Failed to process ZIP file")]
    Archive(#[source] zip::result::ZipError),

    /// Every candidate file was filtered out or unreadable
    #[error("No valid files found")]
    EmptyInput,

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON processing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Session store errors
    #[error("Session error: {0}")]
    Session(String),
}

/// Specialized Result type for monofile operations
pub type Result<T> = std::result::Result<T, Error>;

// Allow converting Error to io::Error for backward compatibility with tests
impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::Other, err.to_string())
    }
}
