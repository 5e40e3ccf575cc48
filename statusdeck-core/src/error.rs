//! Core error types for StatusDeck.

use thiserror::Error;

/// Core error type for StatusDeck operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid data from the status endpoint.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
