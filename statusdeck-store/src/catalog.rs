//! Built-in project catalog.

use statusdeck_core::{Project, ProjectStatus};

/// Returns the default portfolio projects, in display order.
pub fn portfolio() -> Vec<Project> {
    vec![
        Project::new(
            "blaze.codes",
            "https://blaze.codes/",
            "Co-Founder & CTO",
            ProjectStatus::Active,
        )
        .with_description(
            "Software development company leading multiple product teams. \
             Building and shipping products for clients and internal ventures.",
        )
        .with_stack(["TypeScript", "React", "Node.js", "PostgreSQL"]),
        Project::new(
            "jarvischeck.com",
            "https://jarvischeck.com",
            "Founder",
            ProjectStatus::Active,
        )
        .with_description(
            "Website monitoring and alerting service platform. \
             Full-stack SaaS handling uptime checks, notifications, and dashboards.",
        )
        .with_stack(["TypeScript", "React", "Node.js", "PostgreSQL"]),
        Project::new(
            "talentiqa.ai",
            "https://talentiqa.ai",
            "Development Lead",
            ProjectStatus::Completed,
        )
        .with_description(
            "AI-powered talent acquisition platform. \
             Leading the engineering team to deliver intelligent hiring workflows.",
        )
        .with_stack(["TypeScript", "React", "AI/ML", "Node.js"]),
        Project::new(
            "rozpocetpro.cz",
            "https://rozpocetpro.cz",
            "Development Lead",
            ProjectStatus::Active,
        )
        .with_description(
            "Budget management platform for Czech organizations. \
             Leading the full development lifecycle from planning to deployment.",
        )
        .with_stack(["TypeScript", "React", "AI/ML", "Node.js", "PostgreSQL"]),
        Project::new(
            "syncoli.com",
            "https://www.syncoli.com/",
            "Founder",
            ProjectStatus::Maintenance,
        )
        .with_description(
            "Modern digital signage solutions platform. \
             Led a team of 4, handling software, infrastructure, and customer relations.",
        )
        .with_stack(["TypeScript", "React", "Remix", "Rust", "PostgreSQL"]),
        Project::new(
            "xalarm.cz",
            "https://www.xalarm.cz/",
            "Development Lead",
            ProjectStatus::Completed,
        )
        .with_description(
            "Personal safety service with mobile application. \
             Planned, developed, and deployed the full product.",
        )
        .with_stack(["React Native", "Next.js", "Firebase", "Expo"]),
    ]
}
