//! CLI output formatting tests.
//!
//! These tests verify that CLI output is correctly formatted for both
//! text and JSON output modes.

use chrono::{TimeZone, Utc};
use statusdeck_core::{
    PageSummary, Project, ProjectStatus, ProjectView, Service, ServiceStatus, StatusPage,
    StatusPageSnapshot,
};

fn project(url: &str) -> Project {
    Project::new("syncoli.com", url, "Founder", ProjectStatus::Maintenance)
        .with_description("Digital signage platform.")
        .with_stack(["Rust", "PostgreSQL"])
}

fn service(status: ServiceStatus, uptime: f64) -> Service {
    Service::new("Syncoli", "syncoli.com", status, uptime).with_avg_response_time(212.6)
}

fn summary(all_operational: bool) -> PageSummary {
    PageSummary::from_snapshot(&StatusPageSnapshot {
        page: StatusPage {
            name: "Personal".to_string(),
            slug: "personal".to_string(),
            description: Some("Side projects".to_string()),
        },
        services: vec![
            service(ServiceStatus::Ok, 99.95),
            Service::new("Xalarm", "xalarm.cz", ServiceStatus::Error, 95.0),
        ],
        all_operational,
        timeframe_days: 30,
        last_refreshed: Utc.with_ymd_and_hms(2026, 10, 15, 8, 0, 0).unwrap(),
    })
}

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::TextFormatter;
    use super::*;
    use statusdeck_core::Tone;

    #[test]
    fn test_uptime_bar_empty() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.uptime_bar(0.0, Tone::Error), "░░░░░░░░░░");
    }

    #[test]
    fn test_uptime_bar_full() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.uptime_bar(100.0, Tone::Success), "██████████");
    }

    #[test]
    fn test_uptime_bar_clamped() {
        let formatter = TextFormatter::new(false);
        assert_eq!(formatter.uptime_bar(140.0, Tone::Success), "██████████");
        assert_eq!(formatter.uptime_bar(-5.0, Tone::Error), "░░░░░░░░░░");
    }

    #[test]
    fn test_uptime_bar_boundary_values() {
        let formatter = TextFormatter::new(false);

        let test_cases = vec![
            (10.0, "█░░░░░░░░░"),
            (25.0, "███░░░░░░░"), // 2.5 rounds to 3 blocks
            (50.0, "█████░░░░░"),
            (99.0, "██████████"),
        ];

        for (percent, expected) in test_cases {
            assert_eq!(
                formatter.uptime_bar(percent, Tone::Neutral),
                expected,
                "Failed for {percent}%"
            );
        }
    }

    #[test]
    fn test_uptime_bar_colors() {
        let formatter = TextFormatter::new(true);
        assert!(formatter.uptime_bar(99.95, Tone::Success).contains("\x1b[32m"));
        assert!(formatter.uptime_bar(99.3, Tone::Warning).contains("\x1b[33m"));
        assert!(formatter.uptime_bar(95.0, Tone::Error).contains("\x1b[31m"));
    }

    #[test]
    fn test_project_card_monitored() {
        let formatter = TextFormatter::new(false);
        let s = service(ServiceStatus::Ok, 99.95);
        let view = ProjectView::merge(project("https://www.syncoli.com/"), Some(&s), true);

        let output = formatter.format_project(&view);

        assert!(output.contains("syncoli.com [Maintenance]"));
        assert!(output.contains("● Operational 99.95% 213ms"));
        assert!(output.contains("Founder"));
        assert!(output.contains("Rust · PostgreSQL"));
    }

    #[test]
    fn test_project_card_without_response_time() {
        let formatter = TextFormatter::new(false);
        let s = Service::new("Syncoli", "syncoli.com", ServiceStatus::Warning, 99.3);
        let view = ProjectView::merge(project("syncoli.com"), Some(&s), true);

        let output = formatter.format_project(&view);

        let header = output.lines().next().unwrap();
        assert!(header.ends_with("● Degraded 99.30%"));
    }

    #[test]
    fn test_project_card_not_monitored() {
        let formatter = TextFormatter::new(false);
        let view = ProjectView::merge(project("https://xalarm.cz"), None, true);

        let output = formatter.format_project(&view);

        assert!(output.contains("● Not monitored"));
        assert!(!output.contains('%'));
    }

    #[test]
    fn test_project_card_pending_has_no_indicator() {
        let formatter = TextFormatter::new(false);
        let s = service(ServiceStatus::Ok, 99.95);
        let view = ProjectView::merge(project("syncoli.com"), Some(&s), false);

        let output = formatter.format_project(&view);

        assert!(!output.contains('●'));
    }

    #[test]
    fn test_uptime_section() {
        let formatter = TextFormatter::new(false);

        let output = formatter.format_uptime(&summary(false));

        assert!(output.contains("Personal  30d window"));
        assert!(output.contains("Side projects"));
        assert!(output.contains("Issues detected"));
        assert!(output.contains("99.95%"));
        assert!(output.contains("213ms"));
        assert!(output.contains("Down"));
    }

    #[test]
    fn test_uptime_banner_operational() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_uptime(&summary(true));
        assert!(output.contains("All systems operational"));
    }

    #[test]
    fn test_service_line_without_response_time() {
        let formatter = TextFormatter::new(false);
        let summary = summary(false);

        let line = formatter.format_service_line(&summary.services[1]);

        assert!(line.starts_with("Xalarm"));
        assert!(line.contains("95.00%"));
        assert!(line.contains('−'));
    }

    #[test]
    fn test_lookup_not_monitored() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_lookup("https://Example.org/", "example.org", None);
        assert!(output.contains("Key: example.org"));
        assert!(output.contains("Not monitored"));
    }

    #[test]
    fn test_lookup_monitored() {
        let formatter = TextFormatter::new(false);
        let s = service(ServiceStatus::Warning, 99.3).with_incident_count(2);

        let output = formatter.format_lookup("www.syncoli.com", "syncoli.com", Some(&s));

        assert!(output.contains("Service: Syncoli (syncoli.com)"));
        assert!(output.contains("Tier: degraded"));
        assert!(output.contains("Incidents: 2"));
    }

    #[test]
    fn test_footer() {
        let formatter = TextFormatter::new(false);
        let footer = formatter.format_footer(
            Some("jarvischeck.com"),
            Some("https://jarvischeck.com/status/personal"),
        );
        assert_eq!(
            footer,
            "Monitored by jarvischeck.com · https://jarvischeck.com/status/personal"
        );
    }

    #[test]
    fn test_no_color_output_has_no_escapes() {
        let formatter = TextFormatter::new(false);
        assert!(!formatter.format_uptime(&summary(false)).contains('\x1b'));
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::{Attribution, JsonFormatter};
    use super::*;

    fn parse(output: &str) -> serde_json::Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_projects_output() {
        let formatter = JsonFormatter::new(false);
        let s = service(ServiceStatus::Ok, 99.95);
        let views = vec![
            ProjectView::merge(project("https://www.syncoli.com/"), Some(&s), true),
            ProjectView::merge(project("https://xalarm.cz"), None, true),
        ];
        let attribution = Attribution {
            monitored_by: Some("jarvischeck.com".to_string()),
            status_page_url: None,
        };

        let json = parse(&formatter.format_projects(&views, true, attribution).unwrap());

        assert_eq!(json["loaded"], true);
        assert_eq!(json["monitoredBy"], "jarvischeck.com");
        assert!(json.get("statusPageUrl").is_none());
        assert_eq!(json["projects"][0]["badge"], "badge-maintenance");
        assert_eq!(json["projects"][0]["monitoring"]["state"], "monitored");
        assert_eq!(json["projects"][0]["monitoring"]["service"]["tier"], "healthy");
        assert_eq!(json["projects"][0]["monitoring"]["service"]["avgResponseMs"], 213);
        assert_eq!(json["projects"][1]["monitoring"]["label"], "Not monitored");
    }

    #[test]
    fn test_uptime_output() {
        let formatter = JsonFormatter::new(false);

        let json = parse(
            &formatter
                .format_uptime(&summary(false), Attribution::default())
                .unwrap(),
        );

        assert_eq!(json["banner"], "Issues detected");
        assert_eq!(json["timeframeDays"], 30);
        assert_eq!(json["lastRefreshed"], "2026-10-15T08:00:00+00:00");
        assert_eq!(json["services"][1]["status"], "ERROR");
        assert_eq!(json["services"][1]["tier"], "critical");
    }

    #[test]
    fn test_lookup_output() {
        let formatter = JsonFormatter::new(false);

        let json = parse(
            &formatter
                .format_lookup("https://Example.org/", "example.org", true, None)
                .unwrap(),
        );

        assert_eq!(json["key"], "example.org");
        assert_eq!(json["label"], "Not monitored");
        assert!(json.get("service").is_none());
    }
}
