//! Error types for the expiry service
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Store Error Enum ==
/// Errors raised by a user store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("Store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The store cannot serve requests right now
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

// == Sweep Error Enum ==
/// A failed sweep. Query and save failures are handled the same way; the
/// variants only carry context into the log.
#[derive(Error, Debug)]
pub enum SweepError {
    /// Loading users with expired items failed
    #[error("Failed to query users with expired items: {0}")]
    Query(#[source] StoreError),

    /// Persisting a user failed; remaining users were not processed
    #[error("Failed to save user {user_id}: {source}")]
    Save {
        user_id: String,
        #[source]
        source: StoreError,
    },
}

// == Result Type Alias ==
/// Convenience Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
