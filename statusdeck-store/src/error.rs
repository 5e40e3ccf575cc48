//! Store error types.

use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A fetch is already outstanding for this store.
    #[error("Status fetch already in progress")]
    FetchInProgress,

    /// Fetch client could not be set up.
    #[error("Fetch setup failed: {0}")]
    Fetch(#[from] statusdeck_fetch::FetchError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Returns true if the error comes from configuration rather than runtime state.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            StoreError::Config(_) | StoreError::Serialization(_) | StoreError::Fetch(_)
        )
    }
}
