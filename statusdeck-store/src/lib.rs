// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # StatusDeck Store
//!
//! Configuration and fetch lifecycle state for StatusDeck.
//!
//! This crate provides:
//!
//! - **StatusConfig**: Layered endpoint configuration (defaults, file, environment)
//! - **StatusStore**: Fetch state with watch channels and the service index
//! - **StatusMount**: One cancellable fetch activation
//! - **catalog**: The built-in portfolio projects
//!
//! ## Usage
//!
//! ```ignore
//! use statusdeck_store::{StatusConfig, StatusMount};
//!
//! let config = StatusConfig::load()?;
//! let mut mount = StatusMount::from_config(&config)?;
//! mount.settled().await;
//!
//! for view in mount.store().project_views(&config.projects()).await {
//!     println!("{}: {:?}", view.project.name, view.monitoring.label());
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod mount;
pub mod status_store;

pub use config::{
    DEFAULT_API_URL, DEFAULT_STATUS_PAGE_SLUG, ENV_API_URL, ENV_STATUS_PAGE_SLUG, StatusConfig,
};
pub use error::StoreError;
pub use mount::StatusMount;
pub use status_store::{FetchState, LoadedPage, StatusStore};
