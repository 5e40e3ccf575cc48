// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # StatusDeck Fetch
//!
//! HTTP fetching of status page snapshots for the StatusDeck application.
//!
//! ## Host APIs
//!
//! The [`host`] module provides abstractions for system interactions:
//!
//! - [`host::http`] - HTTP client with tracing
//! - [`host::status`] - Status page client
//!
//! ## Example
//!
//! ```ignore
//! use statusdeck_fetch::StatusClient;
//!
//! let client = StatusClient::new("https://jarvischeck.com", "personal")?;
//! let snapshot = client.fetch().await?;
//! println!("{} services", snapshot.services.len());
//! ```

pub mod error;
pub mod host;

// Errors
pub use error::{FetchError, HttpError};

// Host APIs
pub use host::{HttpClient, StatusClient, status_endpoint, status_page_url};
