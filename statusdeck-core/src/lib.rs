// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `StatusDeck` Core
//!
//! Core types, URL reconciliation, and presentation mapping for `StatusDeck`.
//!
//! This crate provides the foundational abstractions used across all other
//! `StatusDeck` crates, including:
//!
//! - Domain models (status page snapshots, services, projects)
//! - URL normalization and the service index
//! - Uptime tiers and status labels
//! - The [`StatusSource`] trait implemented by fetchers
//!
//! ## Key Types
//!
//! ### Monitoring Payload
//! - [`StatusPageSnapshot`] - One fetched status page
//! - [`Service`] - A monitored endpoint
//! - [`ServiceStatus`] - Latest check result
//!
//! ### Projects
//! - [`Project`] - A statically declared portfolio project
//! - [`ProjectStatus`] - Lifecycle stage
//!
//! ### Reconciliation
//! - [`normalize_url`] - Comparison key for a URL
//! - [`ServiceIndex`] - Services keyed by normalized URL
//!
//! ### Presentation
//! - [`UptimeTier`] - healthy / degraded / critical
//! - [`ProjectView`] - Project merged with its monitoring indicator
//! - [`PageSummary`] - Service uptime section

pub mod error;
pub mod models;
pub mod reconcile;
pub mod traits;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Monitoring payload
    Service,
    ServiceStatus,
    StatusPage,
    StatusPageSnapshot,
    // Projects
    Project,
    ProjectStatus,
    // Presentation
    DEGRADED_UPTIME,
    HEALTHY_UPTIME,
    Monitoring,
    PageSummary,
    ProjectView,
    ServiceView,
    Tone,
    UptimeTier,
};

// Re-export reconciliation
pub use reconcile::{ServiceIndex, build_index, lookup, normalize_url};

// Re-export traits
pub use traits::StatusSource;
