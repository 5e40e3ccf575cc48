//! HTTP client with tracing.
//!
//! Thin wrapper over `reqwest` that adds:
//! - Request/response tracing
//! - A fixed user agent
//! - An optional request timeout (none by default, leaving the transport default)

use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, instrument};

use crate::error::HttpError;

/// User agent string for StatusDeck.
const USER_AGENT: &str = concat!("StatusDeck/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with tracing.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    timeout: Option<Duration>,
}

impl HttpClient {
    /// Creates a new HTTP client without a request timeout.
    pub fn new() -> Result<Self, HttpError> {
        Self::build(None)
    }

    /// Creates a new HTTP client with a request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, HttpError> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> Result<Self, HttpError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            inner: builder.build()?,
            timeout,
        })
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Performs a GET request.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn get(&self, url: &str) -> Result<Response, HttpError> {
        debug!("GET request");

        let response = self
            .inner
            .get(url)
            .send()
            .await
            .map_err(HttpError::from_reqwest)?;
        debug!(status = %response.status(), "Response received");
        Ok(response)
    }
}

// ============================================================================
// Tests
// ============================================================================
