//! Host APIs for StatusDeck fetching.
//!
//! - [`http`] - HTTP client with tracing
//! - [`status`] - Status page client for the aggregation endpoint

pub mod http;
pub mod status;

// Re-export key types
pub use http::HttpClient;
pub use status::{StatusClient, status_endpoint, status_page_url};
