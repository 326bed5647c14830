//! Store error types.

use thiserror::Error;

/// Errors that can occur when using a key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the backing store.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A backend read or write failed.
    #[error("Store operation failed: {0}")]
    Backend(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}
