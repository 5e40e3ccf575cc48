//! Lookup command - match one URL against the monitored services.

use anyhow::Result;
use clap::Args;
use statusdeck_core::normalize_url;

use super::{fetch_settled, resolve_config};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Arguments for the lookup command.
#[derive(Args)]
pub struct LookupArgs {
    /// URL to look up, in any formatting.
    pub url: String,
}

/// Runs the lookup command.
pub async fn run(args: &LookupArgs, cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let key = normalize_url(&args.url);

    let mount = fetch_settled(&config).await?;
    let service = mount.get_status(&args.url).await;
    let loaded = mount.is_loaded().await;

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_lookup(&args.url, &key, service.as_ref()));
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!(
                "{}",
                formatter.format_lookup(&args.url, &key, loaded, service.as_ref())?
            );
        }
    }

    Ok(())
}
