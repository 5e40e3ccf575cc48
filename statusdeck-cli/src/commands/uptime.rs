//! Uptime command - the service uptime section of the status page.

use anyhow::Result;
use tracing::debug;

use super::{attribution, fetch_settled, resolve_config};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the uptime command.
///
/// Prints nothing when the fetch did not load data.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let mount = fetch_settled(&config).await?;

    let Some(summary) = mount.store().page_summary().await else {
        debug!("No status data loaded, uptime section hidden");
        return Ok(());
    };
    let attribution = attribution(&config);

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_uptime(&summary));
            println!(
                "{}",
                formatter.format_footer(
                    attribution.monitored_by.as_deref(),
                    attribution.status_page_url.as_deref()
                )
            );
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_uptime(&summary, attribution)?);
        }
    }

    Ok(())
}
