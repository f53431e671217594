//! Error types and handling infrastructure for autocatalog.
//!
//! Problems found *inside* an imported file are not Rust errors: they are
//! collected as [`ParseError`](crate::ingest::ParseError) values and returned
//! alongside the parsed records. The types here cover the system edges only,
//! i.e. reading input files, the favorites store and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for autocatalog operations.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File system related errors (file not found, permission denied, etc.)
    #[error("File operation failed: {message}")]
    FileError {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// File not found specifically (common case for user feedback)
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Imported file is not valid UTF-8 text
    #[error("File is not valid UTF-8 text: {path}")]
    InvalidEncoding { path: PathBuf },

    /// Favorites store could not be read or written
    #[error("Favorites store failed: {message}")]
    StoreError { message: String },

    /// Stored favorites blob is not a JSON array of keys
    #[error("Favorites data is corrupt: {source}")]
    CorruptStore {
        #[source]
        source: serde_json::Error,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

/// Standard Result type for autocatalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Create a FileError from an io::Error with additional context
    pub fn file_error(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::FileError {
            message: message.into(),
            source,
        }
    }

    /// Create a StoreError with a descriptive message
    pub fn store(message: impl Into<String>) -> Self {
        Self::StoreError {
            message: message.into(),
        }
    }

    /// Create a ConfigError with a descriptive message
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(source: serde_json::Error) -> Self {
        Self::CorruptStore { source }
    }
}
