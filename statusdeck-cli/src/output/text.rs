//! Text output formatting with uptime bars and colors.

use chrono::{DateTime, Local, Utc};
use statusdeck_core::{Monitoring, PageSummary, ProjectView, Service, ServiceView, Tone};

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const CYAN: &str = "\x1b[36m";

// Uptime bar characters
const BAR_FULL: char = '█';
const BAR_EMPTY: char = '░';

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
    bar_width: usize,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self {
            use_colors,
            bar_width: 10,
        }
    }

    // ========================================================================
    // Projects
    // ========================================================================

    /// Formats all project cards.
    pub fn format_projects(&self, views: &[ProjectView]) -> String {
        views
            .iter()
            .map(|view| self.format_project(view))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Formats one project card.
    pub fn format_project(&self, view: &ProjectView) -> String {
        let project = &view.project;
        let mut lines = Vec::new();

        let mut header = format!(
            "{} {}",
            self.bold(&project.name),
            self.dim(&format!("[{}]", project.status))
        );
        if let Some(indicator) = self.format_indicator(&view.monitoring) {
            header.push_str("  ");
            header.push_str(&indicator);
        }
        lines.push(header);

        lines.push(format!("  {}", self.cyan(&project.role)));
        if !project.description.is_empty() {
            lines.push(format!("  {}", project.description));
        }
        if !project.stack.is_empty() {
            lines.push(format!("  {}", self.dim(&project.stack.join(" · "))));
        }
        lines.push(format!("  {}", self.dim(&project.url)));

        lines.join("\n")
    }

    /// Formats the monitoring indicator. Pending fetches show nothing.
    fn format_indicator(&self, monitoring: &Monitoring) -> Option<String> {
        let label = monitoring.label()?;
        let tone = monitoring.tone()?;
        let mut indicator = self.paint(tone, &format!("● {label}"));

        if let Some(view) = monitoring.service() {
            indicator.push(' ');
            indicator.push_str(&self.paint(view.tier.tone(), &view.uptime_text()));
            if let Some(ms) = view.avg_response_ms {
                indicator.push(' ');
                indicator.push_str(&self.dim(&format!("{ms}ms")));
            }
        }
        Some(indicator)
    }

    // ========================================================================
    // Uptime Section
    // ========================================================================

    /// Formats the service uptime section for a status page.
    pub fn format_uptime(&self, summary: &PageSummary) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{}  {}",
            self.bold(&summary.name),
            self.dim(&summary.timeframe_label())
        ));
        if let Some(description) = &summary.description {
            lines.push(self.dim(description));
        }
        lines.push("─".repeat(50));
        lines.push(self.paint(
            summary.banner_tone(),
            &format!("{} {}", summary.banner_tone().dot(), summary.banner()),
        ));
        lines.push(String::new());

        for service in &summary.services {
            lines.push(self.format_service_line(service));
        }

        lines.push(String::new());
        lines.push(self.dim(&format!(
            "Updated {}",
            format_timestamp(summary.last_refreshed)
        )));

        lines.join("\n")
    }

    /// Formats a single service row.
    pub fn format_service_line(&self, service: &ServiceView) -> String {
        let tone = service.tier.tone();
        let uptime = self.paint(tone, &format!("{:>8}", service.uptime_text()));
        let response = service
            .avg_response_ms
            .map_or_else(|| "−".to_string(), |ms| format!("{ms}ms"));

        format!(
            "{:<20} {} {} {:>7}  {}",
            service.name,
            self.uptime_bar(service.bar_percent(), tone),
            uptime,
            response,
            self.paint(service.status.tone(), service.label())
        )
    }

    /// Formats the lookup result for one URL.
    pub fn format_lookup(&self, url: &str, key: &str, service: Option<&Service>) -> String {
        let mut lines = vec![
            format!("URL: {url}"),
            format!("Key: {}", self.cyan(key)),
        ];

        match service {
            Some(service) => {
                let view = ServiceView::from_service(service);
                lines.push(format!(
                    "Service: {} ({})",
                    self.bold(&view.name),
                    self.dim(&view.url)
                ));
                lines.push(self.format_service_line(&view));
                lines.push(format!(
                    "Tier: {}",
                    self.paint(view.tier.tone(), view.tier.label())
                ));
                if view.incident_count > 0 {
                    lines.push(format!("Incidents: {}", view.incident_count));
                }
                if let Some(checked) = view.last_checked {
                    lines.push(format!("Last checked: {}", format_timestamp(checked)));
                }
            }
            None => lines.push(self.paint(Tone::Neutral, "Not monitored")),
        }

        lines.join("\n")
    }

    /// Formats the attribution footer and status page link.
    pub fn format_footer(&self, host: Option<&str>, status_page: Option<&str>) -> String {
        let mut parts = Vec::new();
        if let Some(host) = host {
            parts.push(format!("Monitored by {host}"));
        }
        if let Some(link) = status_page {
            parts.push(link.to_string());
        }
        self.dim(&parts.join(" · "))
    }

    /// Formats an uptime bar.
    pub fn uptime_bar(&self, percent: f64, tone: Tone) -> String {
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let filled = ((percent.clamp(0.0, 100.0) / 100.0) * self.bar_width as f64).round() as usize;
        let empty = self.bar_width.saturating_sub(filled);

        let bar = format!(
            "{}{}",
            BAR_FULL.to_string().repeat(filled),
            BAR_EMPTY.to_string().repeat(empty)
        );

        self.paint(tone, &bar)
    }

    // ========================================================================
    // Color/style helpers
    // ========================================================================

    fn paint(&self, tone: Tone, text: &str) -> String {
        match tone {
            Tone::Success => self.green(text),
            Tone::Warning => self.yellow(text),
            Tone::Error => self.red(text),
            Tone::Neutral => self.dim(text),
        }
    }

    fn bold(&self, text: &str) -> String {
        self.style(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.style(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.style(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.style(YELLOW, text)
    }

    fn red(&self, text: &str) -> String {
        self.style(RED, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.style(CYAN, text)
    }

    fn style(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

fn format_timestamp(dt: DateTime<Utc>) -> String {
    dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}
