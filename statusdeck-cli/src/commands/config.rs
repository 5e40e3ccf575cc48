//! Config command - inspect configuration.

use anyhow::Result;
use clap::{Args, Subcommand};
use statusdeck_store::{ENV_API_URL, ENV_STATUS_PAGE_SLUG, StatusConfig};

use super::resolve_config;
use crate::output::JsonFormatter;
use crate::{Cli, OutputFormat};

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration.
    Show,

    /// Show the configuration file path.
    Path,
}

/// Runs the config command.
pub fn run(args: &ConfigArgs, cli: &Cli) -> Result<()> {
    match &args.action {
        ConfigAction::Show => show_config(cli),
        ConfigAction::Path => show_path(cli),
    }
}

fn show_config(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;

    match cli.format {
        OutputFormat::Text => {
            println!("StatusDeck Configuration");
            println!("{}", "─".repeat(40));
            println!();
            println!("API URL:      {}", config.api_url);
            println!("Slug:         {}", config.slug);
            println!("Endpoint:     {}", config.endpoint()?);
            println!("Status page:  {}", config.status_page_url()?);
            match config.request_timeout() {
                Some(timeout) => println!("Timeout:      {}s", timeout.as_secs()),
                None => println!("Timeout:      transport default"),
            }
            let source = if config.projects.is_some() {
                "config file"
            } else {
                "built-in"
            };
            println!("Projects:     {} ({source})", config.projects().len());
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            let output = serde_json::json!({
                "apiUrl": config.api_url,
                "slug": config.slug,
                "endpoint": config.endpoint()?.as_str(),
                "statusPageUrl": config.status_page_url()?.as_str(),
                "requestTimeoutSecs": config.request_timeout_secs,
                "projects": config.projects(),
            });
            println!("{}", formatter.format(&output)?);
        }
    }

    Ok(())
}

fn show_path(cli: &Cli) -> Result<()> {
    let path = StatusConfig::default_path();
    let exists = path.exists();

    match cli.format {
        OutputFormat::Text => {
            println!("Configuration Paths");
            println!("{}", "─".repeat(40));
            println!();
            println!(
                "Config file: {}{}",
                path.display(),
                if exists { "" } else { " (not found)" }
            );
            println!("Environment: {ENV_API_URL}, {ENV_STATUS_PAGE_SLUG}");
        }
        OutputFormat::Json => {
            let paths = serde_json::json!({
                "configFile": path.display().to_string(),
                "exists": exists,
                "env": [ENV_API_URL, ENV_STATUS_PAGE_SLUG],
            });
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format(&paths)?);
        }
    }

    Ok(())
}
