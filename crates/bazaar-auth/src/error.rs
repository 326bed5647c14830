//! Auth error types.

use thiserror::Error;

/// Errors from the mock credential flows.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Email not found in the user directory.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration attempted with an email that already exists.
    #[error("Email already in use: {0}")]
    EmailInUse(String),

    /// The backing key-value store failed.
    #[error("Store error: {0}")]
    Store(#[from] bazaar_kv::StoreError),
}
