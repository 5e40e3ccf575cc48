//! Configuration management.
//!
//! The status endpoint is resolved once per process, in layers:
//! built-in defaults, then an optional JSON file, then environment variables.
//! Front ends may apply their own overrides (command-line flags) on top.

use crate::catalog;
use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use statusdeck_core::Project;
use statusdeck_fetch::{HttpClient, StatusClient, status_endpoint, status_page_url};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Monitoring backend used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://jarvischeck.com";

/// Status page slug used when nothing else is configured.
pub const DEFAULT_STATUS_PAGE_SLUG: &str = "personal";

/// Environment variable overriding the backend base URL.
pub const ENV_API_URL: &str = "STATUSDECK_API_URL";

/// Environment variable overriding the status page slug.
pub const ENV_STATUS_PAGE_SLUG: &str = "STATUSDECK_STATUS_PAGE_SLUG";

/// Status endpoint configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Base URL of the monitoring backend.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Slug of the status page to fetch.
    #[serde(default = "default_slug")]
    pub slug: String,
    /// Request timeout in seconds. Unset leaves the transport default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
    /// Replacement project catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects: Option<Vec<Project>>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_slug() -> String {
    DEFAULT_STATUS_PAGE_SLUG.to_string()
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            slug: default_slug(),
            request_timeout_secs: None,
            projects: None,
        }
    }
}

impl StatusConfig {
    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("statusdeck")
            .join("config.json")
    }

    /// Loads defaults, the default config file, and the environment.
    pub fn load() -> Result<Self, StoreError> {
        let mut config = Self::load_from(&Self::default_path())?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a specific file, falling back to defaults.
    pub fn load_from(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: StatusConfig = serde_json::from_str(&content)?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Applies overrides from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_lookup(|key| std::env::var(key).ok());
    }

    /// Applies overrides from an environment-style lookup.
    ///
    /// Blank values are treated as unset.
    pub fn apply_lookup<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(api_url) = non_blank(ENV_API_URL) {
            debug!(api_url = %api_url, "API URL overridden from environment");
            self.api_url = api_url.trim().to_string();
        }
        if let Some(slug) = non_blank(ENV_STATUS_PAGE_SLUG) {
            debug!(slug = %slug, "Status page slug overridden from environment");
            self.slug = slug.trim().to_string();
        }
    }

    /// Sets the API base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Sets the status page slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Checks that the base URL and slug form a usable endpoint.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.slug.trim().is_empty() {
            return Err(StoreError::Config("status page slug is empty".to_string()));
        }
        status_endpoint(&self.api_url, &self.slug)
            .map(|_| ())
            .map_err(|e| StoreError::Config(e.to_string()))
    }

    /// Returns the status endpoint URL.
    pub fn endpoint(&self) -> Result<Url, StoreError> {
        Ok(status_endpoint(&self.api_url, &self.slug)?)
    }

    /// Returns the public status page URL.
    pub fn status_page_url(&self) -> Result<Url, StoreError> {
        Ok(status_page_url(&self.api_url, &self.slug)?)
    }

    /// Returns the backend host for attribution, e.g. `jarvischeck.com`.
    pub fn monitor_host(&self) -> Option<String> {
        Url::parse(&self.api_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
    }

    /// Returns the configured request timeout.
    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Returns the project catalog, configured or built in.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.clone().unwrap_or_else(catalog::portfolio)
    }

    /// Builds a status client for this configuration.
    pub fn client(&self) -> Result<StatusClient, StoreError> {
        let http = match self.request_timeout() {
            Some(timeout) => HttpClient::with_timeout(timeout),
            None => HttpClient::new(),
        }
        .map_err(statusdeck_fetch::FetchError::from)?;

        Ok(StatusClient::with_client(http, &self.api_url, &self.slug)?)
    }
}

// ============================================================================
// Tests
// ============================================================================
