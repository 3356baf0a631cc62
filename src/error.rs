//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by record and address book operations.
#[derive(Error, Debug)]
pub enum BookError {
    /// A field value was rejected
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Edit or remove target is absent
    #[error("{kind} not found: {value}")]
    NotFound { kind: &'static str, value: String },

    /// Saving or loading failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl BookError {
    pub(crate) fn not_found(kind: &'static str, value: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            value: value.into(),
        }
    }
}

/// Errors that can occur while persisting or restoring an address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not a valid address book document
    #[error("Invalid address book format: {0}")]
    Format(#[from] serde_json::Error),

    /// Document was written by an incompatible format version
    #[error("Unsupported address book version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    /// Two records in one document share a name
    #[error("Duplicate record name in address book: {0}")]
    DuplicateName(String),
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
