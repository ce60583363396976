//! Error types for calstore.

use thiserror::Error;

/// Errors that can occur in calstore operations.
#[derive(Error, Debug)]
pub enum CalStoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Stored snapshot could not be decoded: {0}")]
    LoadDecode(String),

    #[error("Could not write to storage: {0}")]
    StorageWrite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid category '{0}'. Expected one of: Work, Personal, Birthdays, Anniversary")]
    InvalidCategory(String),
}

/// Result type alias for calstore operations.
pub type CalStoreResult<T> = Result<T, CalStoreError>;
