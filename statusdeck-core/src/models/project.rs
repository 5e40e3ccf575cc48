//! Statically declared portfolio projects.

use serde::{Deserialize, Serialize};

// ============================================================================
// Project Status
// ============================================================================

/// Lifecycle stage of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    /// Under active development.
    Active,
    /// Running, receiving fixes only.
    Maintenance,
    /// Delivered and handed off.
    Completed,
}

impl ProjectStatus {
    /// Returns the badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Maintenance => "Maintenance",
            Self::Completed => "Completed",
        }
    }

    /// Returns the CSS-style badge class used by the site.
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Active => "badge-active",
            Self::Maintenance => "badge-maintenance",
            Self::Completed => "badge-completed",
        }
    }
}

impl std::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ============================================================================
// Project
// ============================================================================

/// A portfolio project. Its `url` is matched against monitored services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name.
    pub name: String,
    /// Public URL, in whatever form it was written down.
    pub url: String,
    /// Role held on the project.
    pub role: String,
    /// Short description.
    pub description: String,
    /// Technologies used.
    #[serde(default)]
    pub stack: Vec<String>,
    /// Lifecycle stage.
    pub status: ProjectStatus,
}

impl Project {
    /// Creates a project with an empty description and stack.
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        role: impl Into<String>,
        status: ProjectStatus,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            role: role.into(),
            description: String::new(),
            stack: Vec::new(),
            status,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the technology stack.
    pub fn with_stack<I, S>(mut self, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stack = stack.into_iter().map(Into::into).collect();
        self
    }
}
