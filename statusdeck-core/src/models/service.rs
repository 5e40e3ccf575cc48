//! Monitoring payload types.
//!
//! These mirror the JSON served by the status aggregation endpoint:
//! - [`StatusPageSnapshot`] - One fetched status page
//! - [`Service`] - A single monitored endpoint
//! - [`ServiceStatus`] - Current check result of a service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::CoreError;

// ============================================================================
// Service Status
// ============================================================================

/// Check result reported by the monitoring backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceStatus {
    /// Endpoint responded normally.
    Ok,
    /// Endpoint is down.
    Error,
    /// Endpoint is responding but degraded.
    Warning,
    /// Instrumented, but the backend has no verdict.
    #[default]
    #[serde(other)]
    Unknown,
}

impl ServiceStatus {
    /// Returns all statuses.
    pub fn all() -> &'static [ServiceStatus] {
        &[Self::Ok, Self::Error, Self::Warning, Self::Unknown]
    }
}

// ============================================================================
// Service
// ============================================================================

/// A monitored endpoint as reported by the status page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Display name.
    pub name: String,
    /// URL as recorded by the monitoring backend.
    pub url: String,
    /// Latest check result.
    #[serde(default)]
    pub status: ServiceStatus,
    /// Uptime percentage over the page timeframe, `0..=100`.
    pub uptime: f64,
    /// Incidents within the page timeframe.
    #[serde(default)]
    pub incident_count: u64,
    /// Mean response time in milliseconds.
    #[serde(default)]
    pub avg_response_time: Option<f64>,
    /// When the endpoint was last checked.
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub last_checked: Option<DateTime<Utc>>,
}

impl Service {
    /// Creates a service with the given name, URL, status and uptime.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        status: ServiceStatus,
        uptime: f64,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            status,
            uptime,
            incident_count: 0,
            avg_response_time: None,
            last_checked: None,
        }
    }

    /// Sets the average response time.
    pub fn with_avg_response_time(mut self, millis: f64) -> Self {
        self.avg_response_time = Some(millis);
        self
    }

    /// Sets the incident count.
    pub fn with_incident_count(mut self, count: u64) -> Self {
        self.incident_count = count;
        self
    }
}

/// Accepts RFC 3339 strings; anything else (null, numbers, garbage) is absent.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

// ============================================================================
// Status Page
// ============================================================================

/// Identity of the status page a snapshot belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPage {
    /// Page title.
    pub name: String,
    /// URL slug of the page.
    pub slug: String,
    /// Optional page description.
    #[serde(default)]
    pub description: Option<String>,
}

/// One fetched status page payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusPageSnapshot {
    /// Page identity.
    pub page: StatusPage,
    /// Monitored services in backend order.
    #[serde(default)]
    pub services: Vec<Service>,
    /// Whether the backend considers every service healthy.
    pub all_operational: bool,
    /// Window, in days, that uptime figures cover.
    pub timeframe_days: u32,
    /// When the backend last recomputed the page.
    pub last_refreshed: DateTime<Utc>,
}

impl StatusPageSnapshot {
    /// Decodes a snapshot from a response body.
    pub fn from_json(body: &[u8]) -> Result<Self, CoreError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(CoreError::InvalidData("empty response body".to_string()));
        }
        Ok(serde_json::from_slice(body)?)
    }

    /// Returns true if the page lists no services.
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
