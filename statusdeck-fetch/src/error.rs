//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for status fetch operations.
///
/// Every variant degrades to "no data" downstream; the split exists for
/// logging.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The endpoint answered with a non-2xx status.
    #[error("Unexpected status code: {status}")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
    },

    /// The response body is not a status page snapshot.
    #[error("Invalid response: {0}")]
    Decode(#[from] statusdeck_core::CoreError),

    /// The configured base URL and slug do not form a valid endpoint.
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),
}

impl FetchError {
    /// Returns true if the server answered, but not with a snapshot.
    pub fn is_bad_response(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { .. } | Self::Decode(_))
    }
}

// ============================================================================
// HTTP Error
// ============================================================================

/// HTTP-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request error.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Timeout.
    #[error("Request timed out")]
    Timeout,
}

impl HttpError {
    /// Classifies a reqwest error, separating timeouts.
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(err)
        }
    }
}
