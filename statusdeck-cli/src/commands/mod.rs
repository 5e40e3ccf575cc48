//! CLI command implementations.

pub mod config;
pub mod lookup;
pub mod projects;
pub mod uptime;

use anyhow::Result;
use statusdeck_store::{StatusConfig, StatusMount};
use tracing::debug;

use crate::Cli;
use crate::output::Attribution;

/// Resolves the effective configuration: defaults, file, environment, flags.
pub fn resolve_config(cli: &Cli) -> Result<StatusConfig> {
    let mut config = StatusConfig::load_from(&StatusConfig::default_path())?;
    config.apply_env();
    apply_flags(&mut config, cli);
    config.validate()?;
    Ok(config)
}

fn apply_flags(config: &mut StatusConfig, cli: &Cli) {
    if let Some(api_url) = &cli.api_url {
        config.api_url.clone_from(api_url);
    }
    if let Some(slug) = &cli.slug {
        config.slug.clone_from(slug);
    }
}

/// Activates a status mount and waits for the fetch to settle.
pub async fn fetch_settled(config: &StatusConfig) -> Result<StatusMount> {
    let mut mount = StatusMount::from_config(config)?;
    let state = mount.settled().await;
    debug!(state = state.name(), source = mount.source(), "Status fetch settled");
    Ok(mount)
}

/// Builds the footer details for page-level output.
pub fn attribution(config: &StatusConfig) -> Attribution {
    Attribution {
        monitored_by: config.monitor_host(),
        status_page_url: config.status_page_url().ok().map(String::from),
    }
}
