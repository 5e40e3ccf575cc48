//! Status page client.
//!
//! Fetches one status page snapshot from the aggregation endpoint at
//! `{api_url}/api/public/status/{slug}`. A single attempt is made per call:
//! non-2xx responses and undecodable bodies are errors, nothing is retried.

use statusdeck_core::{StatusPageSnapshot, StatusSource};
use tracing::{debug, instrument};
use url::Url;

use super::http::HttpClient;
use crate::error::{FetchError, HttpError};

/// Path segments between the base URL and the slug.
const STATUS_PATH: [&str; 3] = ["api", "public", "status"];

// ============================================================================
// Endpoints
// ============================================================================

/// Builds the status endpoint for a base URL and page slug.
///
/// Any path on the base URL is kept, trailing slashes are dropped, and the
/// slug is percent-encoded as a single path segment.
pub fn status_endpoint(api_url: &str, slug: &str) -> Result<Url, FetchError> {
    if slug.is_empty() {
        return Err(FetchError::InvalidEndpoint("empty status page slug".to_string()));
    }

    let mut url = parse_base(api_url)?;
    url.path_segments_mut()
        .map_err(|()| FetchError::InvalidEndpoint(format!("{api_url} cannot be a base URL")))?
        .pop_if_empty()
        .extend(STATUS_PATH)
        .push(slug);
    Ok(url)
}

/// Builds the public, human-facing status page URL.
pub fn status_page_url(api_url: &str, slug: &str) -> Result<Url, FetchError> {
    let mut url = parse_base(api_url)?;
    url.path_segments_mut()
        .map_err(|()| FetchError::InvalidEndpoint(format!("{api_url} cannot be a base URL")))?
        .pop_if_empty()
        .push("status")
        .push(slug);
    Ok(url)
}

fn parse_base(api_url: &str) -> Result<Url, FetchError> {
    let url = Url::parse(api_url.trim_end_matches('/'))
        .map_err(|e| FetchError::InvalidEndpoint(format!("{api_url}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidEndpoint(format!(
            "unsupported scheme {other} in {api_url}"
        ))),
    }
}

// ============================================================================
// Status Client
// ============================================================================

/// Client for one status page.
#[derive(Debug, Clone)]
pub struct StatusClient {
    client: HttpClient,
    endpoint: Url,
}

impl StatusClient {
    /// Creates a client for the page `slug` served under `api_url`.
    pub fn new(api_url: &str, slug: &str) -> Result<Self, FetchError> {
        Self::with_client(HttpClient::new()?, api_url, slug)
    }

    /// Creates a client with a custom HTTP client.
    pub fn with_client(client: HttpClient, api_url: &str, slug: &str) -> Result<Self, FetchError> {
        Ok(Self {
            client,
            endpoint: status_endpoint(api_url, slug)?,
        })
    }

    /// Returns the endpoint this client requests.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches and decodes the status page.
    #[instrument(skip(self), fields(url = %self.endpoint))]
    pub async fn fetch(&self) -> Result<StatusPageSnapshot, FetchError> {
        debug!("Fetching status page");

        let response = self.client.get(self.endpoint.as_str()).await.map_err(|e| {
            debug!(error = %e, "Failed to reach status endpoint");
            e
        })?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "Status endpoint returned an error status");
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(HttpError::from_reqwest)?;
        let snapshot = StatusPageSnapshot::from_json(&body).map_err(|e| {
            debug!(error = %e, "Status page body could not be decoded");
            e
        })?;

        debug!(
            services = snapshot.services.len(),
            all_operational = snapshot.all_operational,
            "Status page fetched successfully"
        );
        Ok(snapshot)
    }
}

impl StatusSource for StatusClient {
    type Error = FetchError;

    fn describe(&self) -> String {
        self.endpoint.to_string()
    }

    async fn fetch_snapshot(&self) -> Result<StatusPageSnapshot, FetchError> {
        self.fetch().await
    }
}

// ============================================================================
// Tests
// ============================================================================
