//! Status presentation types.
//!
//! Pure derivations from monitoring data to display semantics:
//! - [`UptimeTier`] - Health tier from an uptime percentage
//! - [`Tone`] - Display tone shared by tiers and statuses
//! - [`ServiceView`] - Display-ready service row
//! - [`Monitoring`] - Per-project monitoring indicator
//! - [`ProjectView`] - Project merged with its monitoring indicator
//! - [`PageSummary`] - Service uptime section for a whole status page

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::Project;
use super::service::{Service, ServiceStatus, StatusPageSnapshot};

/// Lowest uptime percentage still considered healthy.
pub const HEALTHY_UPTIME: f64 = 99.9;

/// Lowest uptime percentage still considered degraded.
pub const DEGRADED_UPTIME: f64 = 99.0;

// ============================================================================
// Tone
// ============================================================================

/// Display tone, mapped to a color by each front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Green.
    Success,
    /// Yellow.
    Warning,
    /// Red.
    Error,
    /// Dimmed text color.
    Neutral,
}

impl Tone {
    /// Returns a status dot for the tone.
    pub fn dot(&self) -> &'static str {
        match self {
            Self::Success => "🟢",
            Self::Warning => "🟡",
            Self::Error => "🔴",
            Self::Neutral => "⚪",
        }
    }
}

// ============================================================================
// Uptime Tier
// ============================================================================

/// Three-level health classification of an uptime percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UptimeTier {
    /// `uptime >= 99.9`.
    Healthy,
    /// `99.0 <= uptime < 99.9`.
    Degraded,
    /// `uptime < 99.0`, including NaN.
    Critical,
}

impl UptimeTier {
    /// Classifies an uptime percentage.
    pub fn from_uptime(uptime: f64) -> Self {
        if uptime >= HEALTHY_UPTIME {
            Self::Healthy
        } else if uptime >= DEGRADED_UPTIME {
            Self::Degraded
        } else {
            Self::Critical
        }
    }

    /// Returns the tier name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Critical => "critical",
        }
    }

    /// Returns the display tone.
    pub fn tone(&self) -> Tone {
        match self {
            Self::Healthy => Tone::Success,
            Self::Degraded => Tone::Warning,
            Self::Critical => Tone::Error,
        }
    }
}

impl std::fmt::Display for UptimeTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Service Status Presentation
// ============================================================================

impl ServiceStatus {
    /// Returns a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ok => "Operational",
            Self::Error => "Down",
            Self::Warning => "Degraded",
            Self::Unknown => "Unknown",
        }
    }

    /// Returns the display tone.
    pub fn tone(&self) -> Tone {
        match self {
            Self::Ok => Tone::Success,
            Self::Error => Tone::Error,
            Self::Warning => Tone::Warning,
            Self::Unknown => Tone::Neutral,
        }
    }
}

impl std::fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.tone().dot(), self.label())
    }
}

// ============================================================================
// Service View
// ============================================================================

/// A service row ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceView {
    /// Service name.
    pub name: String,
    /// Service URL as reported by the backend.
    pub url: String,
    /// Raw status.
    pub status: ServiceStatus,
    /// Health tier of the uptime figure.
    pub tier: UptimeTier,
    /// Uptime percentage.
    pub uptime: f64,
    /// Incidents within the page timeframe.
    pub incident_count: u64,
    /// Average response time rounded to whole milliseconds.
    pub avg_response_ms: Option<u64>,
    /// When the endpoint was last checked.
    pub last_checked: Option<DateTime<Utc>>,
}

impl ServiceView {
    /// Derives the display row for a service.
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name.clone(),
            url: service.url.clone(),
            status: service.status,
            tier: UptimeTier::from_uptime(service.uptime),
            uptime: service.uptime,
            incident_count: service.incident_count,
            avg_response_ms: service.avg_response_time.and_then(round_millis),
            last_checked: service.last_checked,
        }
    }

    /// Returns the status label.
    pub fn label(&self) -> &'static str {
        self.status.label()
    }

    /// Uptime with two decimals, e.g. `99.95%`.
    pub fn uptime_text(&self) -> String {
        format!("{:.2}%", self.uptime)
    }

    /// Uptime bar fill, clamped to `0..=100`.
    pub fn bar_percent(&self) -> f64 {
        if self.uptime.is_nan() {
            return 0.0;
        }
        self.uptime.clamp(0.0, 100.0)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_millis(millis: f64) -> Option<u64> {
    if millis.is_finite() && millis >= 0.0 {
        Some(millis.round() as u64)
    } else {
        None
    }
}

// ============================================================================
// Monitoring Indicator
// ============================================================================

/// Monitoring indicator attached to a project.
#[derive(Debug, Clone, PartialEq)]
pub enum Monitoring {
    /// The fetch has not settled yet; no indicator is shown.
    Pending,
    /// No monitored service matches the project URL.
    NotMonitored,
    /// A monitored service matches the project URL.
    Monitored(ServiceView),
}

impl Monitoring {
    /// Returns the indicator label, if an indicator is shown.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Pending => None,
            Self::NotMonitored => Some("Not monitored"),
            Self::Monitored(view) => Some(view.label()),
        }
    }

    /// Returns the indicator tone, if an indicator is shown.
    pub fn tone(&self) -> Option<Tone> {
        match self {
            Self::Pending => None,
            Self::NotMonitored => Some(Tone::Neutral),
            Self::Monitored(view) => Some(view.status.tone()),
        }
    }

    /// Returns the uptime tier, only for monitored projects.
    pub fn tier(&self) -> Option<UptimeTier> {
        match self {
            Self::Monitored(view) => Some(view.tier),
            _ => None,
        }
    }

    /// Returns the matched service view.
    pub fn service(&self) -> Option<&ServiceView> {
        match self {
            Self::Monitored(view) => Some(view),
            _ => None,
        }
    }
}

// ============================================================================
// Project View
// ============================================================================

/// A project card merged with its monitoring indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView {
    /// The declared project.
    pub project: Project,
    /// Monitoring indicator.
    pub monitoring: Monitoring,
}

impl ProjectView {
    /// Merges a project with the result of a service lookup.
    ///
    /// `settled` is false while the fetch is still outstanding, in which
    /// case no indicator is derived regardless of `service`.
    pub fn merge(project: Project, service: Option<&Service>, settled: bool) -> Self {
        let monitoring = match (settled, service) {
            (false, _) => Monitoring::Pending,
            (true, None) => Monitoring::NotMonitored,
            (true, Some(service)) => Monitoring::Monitored(ServiceView::from_service(service)),
        };
        Self {
            project,
            monitoring,
        }
    }
}

// ============================================================================
// Page Summary
// ============================================================================

/// The service uptime section for one status page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageSummary {
    /// Page title.
    pub name: String,
    /// Page slug.
    pub slug: String,
    /// Page description.
    pub description: Option<String>,
    /// Whether every service is operational.
    pub all_operational: bool,
    /// Uptime window in days.
    pub timeframe_days: u32,
    /// When the backend last recomputed the page.
    pub last_refreshed: DateTime<Utc>,
    /// One row per service, in backend order.
    pub services: Vec<ServiceView>,
}

impl PageSummary {
    /// Derives the uptime section from a snapshot.
    pub fn from_snapshot(snapshot: &StatusPageSnapshot) -> Self {
        Self {
            name: snapshot.page.name.clone(),
            slug: snapshot.page.slug.clone(),
            description: snapshot.page.description.clone(),
            all_operational: snapshot.all_operational,
            timeframe_days: snapshot.timeframe_days,
            last_refreshed: snapshot.last_refreshed,
            services: snapshot.services.iter().map(ServiceView::from_service).collect(),
        }
    }

    /// Returns the page banner text.
    pub fn banner(&self) -> &'static str {
        if self.all_operational {
            "All systems operational"
        } else {
            "Issues detected"
        }
    }

    /// Returns the banner tone.
    pub fn banner_tone(&self) -> Tone {
        if self.all_operational {
            Tone::Success
        } else {
            Tone::Error
        }
    }

    /// Returns the timeframe label, e.g. `30d window`.
    pub fn timeframe_label(&self) -> String {
        format!("{}d window", self.timeframe_days)
    }
}

// ============================================================================
// Tests
// ============================================================================
