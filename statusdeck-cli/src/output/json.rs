//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use statusdeck_core::{Monitoring, PageSummary, ProjectView, Service, ServiceView, UptimeTier};

// ============================================================================
// Output Types
// ============================================================================

/// JSON output for the projects command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectsOutput {
    pub loaded: bool,
    pub projects: Vec<ProjectOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_page_url: Option<String>,
}

/// A single project card.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOutput {
    pub name: String,
    pub url: String,
    pub role: String,
    pub description: String,
    pub stack: Vec<String>,
    pub status: String,
    pub badge: String,
    pub monitoring: MonitoringOutput,
}

/// Monitoring indicator attached to a project.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringOutput {
    /// `pending`, `not_monitored` or `monitored`.
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceOutput>,
}

/// A monitored service row.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOutput {
    pub name: String,
    pub url: String,
    pub status: String,
    pub label: String,
    pub tier: UptimeTier,
    pub uptime: f64,
    pub incident_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_response_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_datetime_opt")]
    pub last_checked: Option<DateTime<Utc>>,
}

/// JSON output for the uptime command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UptimeOutput {
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub all_operational: bool,
    pub banner: String,
    pub timeframe_days: u32,
    #[serde(serialize_with = "serialize_datetime")]
    pub last_refreshed: DateTime<Utc>,
    pub services: Vec<ServiceOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_page_url: Option<String>,
}

/// JSON output for the lookup command.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupOutput {
    pub url: String,
    pub key: String,
    pub loaded: bool,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<ServiceOutput>,
}

/// Footer details shared by page-level outputs.
#[derive(Debug, Default)]
pub struct Attribution {
    pub monitored_by: Option<String>,
    pub status_page_url: Option<String>,
}

// ============================================================================
// Serialization helpers
// ============================================================================

fn serialize_datetime<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339())
}

#[allow(clippy::ref_option)]
fn serialize_datetime_opt<S>(dt: &Option<DateTime<Utc>>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => s.serialize_str(&dt.to_rfc3339()),
        None => s.serialize_none(),
    }
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats project cards.
    pub fn format_projects(
        &self,
        views: &[ProjectView],
        loaded: bool,
        attribution: Attribution,
    ) -> Result<String> {
        let output = ProjectsOutput {
            loaded,
            projects: views.iter().map(project_to_output).collect(),
            monitored_by: attribution.monitored_by,
            status_page_url: attribution.status_page_url,
        };
        self.format(&output)
    }

    /// Formats the uptime section.
    pub fn format_uptime(&self, summary: &PageSummary, attribution: Attribution) -> Result<String> {
        let output = UptimeOutput {
            name: summary.name.clone(),
            slug: summary.slug.clone(),
            description: summary.description.clone(),
            all_operational: summary.all_operational,
            banner: summary.banner().to_string(),
            timeframe_days: summary.timeframe_days,
            last_refreshed: summary.last_refreshed,
            services: summary.services.iter().map(service_to_output).collect(),
            monitored_by: attribution.monitored_by,
            status_page_url: attribution.status_page_url,
        };
        self.format(&output)
    }

    /// Formats a lookup result.
    pub fn format_lookup(
        &self,
        url: &str,
        key: &str,
        loaded: bool,
        service: Option<&Service>,
    ) -> Result<String> {
        let view = service.map(ServiceView::from_service);
        let output = LookupOutput {
            url: url.to_string(),
            key: key.to_string(),
            loaded,
            label: view
                .as_ref()
                .map_or("Not monitored", ServiceView::label)
                .to_string(),
            service: view.as_ref().map(service_to_output),
        };
        self.format(&output)
    }
}

fn project_to_output(view: &ProjectView) -> ProjectOutput {
    let project = &view.project;
    ProjectOutput {
        name: project.name.clone(),
        url: project.url.clone(),
        role: project.role.clone(),
        description: project.description.clone(),
        stack: project.stack.clone(),
        status: project.status.label().to_string(),
        badge: project.status.badge().to_string(),
        monitoring: monitoring_to_output(&view.monitoring),
    }
}

fn monitoring_to_output(monitoring: &Monitoring) -> MonitoringOutput {
    let state = match monitoring {
        Monitoring::Pending => "pending",
        Monitoring::NotMonitored => "not_monitored",
        Monitoring::Monitored(_) => "monitored",
    };
    MonitoringOutput {
        state: state.to_string(),
        label: monitoring.label().map(str::to_string),
        service: monitoring.service().map(service_to_output),
    }
}

fn service_to_output(view: &ServiceView) -> ServiceOutput {
    let status = serde_json::to_value(view.status)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();

    ServiceOutput {
        name: view.name.clone(),
        url: view.url.clone(),
        status,
        label: view.label().to_string(),
        tier: view.tier,
        uptime: view.uptime,
        incident_count: view.incident_count,
        avg_response_ms: view.avg_response_ms,
        last_checked: view.last_checked,
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use statusdeck_core::ServiceStatus;

    #[test]
    fn test_format_pretty() {
        let formatter = JsonFormatter::new(true);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(output.contains('\n'));
    }

    #[test]
    fn test_format_compact() {
        let formatter = JsonFormatter::new(false);
        let data = serde_json::json!({"key": "value"});
        let output = formatter.format(&data).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn test_service_output_uses_wire_status() {
        let service = Service::new("Blaze", "blaze.codes", ServiceStatus::Warning, 99.3);
        let output = service_to_output(&ServiceView::from_service(&service));
        assert_eq!(output.status, "WARNING");
        assert_eq!(output.label, "Degraded");
        assert_eq!(output.tier, UptimeTier::Degraded);
    }

    #[test]
    fn test_monitoring_states() {
        assert_eq!(monitoring_to_output(&Monitoring::Pending).state, "pending");
        let not_monitored = monitoring_to_output(&Monitoring::NotMonitored);
        assert_eq!(not_monitored.state, "not_monitored");
        assert_eq!(not_monitored.label.as_deref(), Some("Not monitored"));
    }
}
