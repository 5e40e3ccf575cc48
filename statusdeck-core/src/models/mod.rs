//! Domain models for StatusDeck.
//!
//! ## Submodules
//!
//! - [`service`] - Monitoring payload (StatusPageSnapshot, Service, ServiceStatus)
//! - [`project`] - Portfolio projects (Project, ProjectStatus)
//! - [`status`] - Presentation (UptimeTier, ServiceView, ProjectView, PageSummary)

mod project;
mod service;
mod status;

// Re-export everything at the models level
pub use project::{Project, ProjectStatus};
pub use service::{Service, ServiceStatus, StatusPage, StatusPageSnapshot};
pub use status::{
    DEGRADED_UPTIME, HEALTHY_UPTIME, Monitoring, PageSummary, ProjectView, ServiceView, Tone,
    UptimeTier,
};
