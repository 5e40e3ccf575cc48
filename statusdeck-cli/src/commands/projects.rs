//! Projects command - project cards merged with monitoring data.

use anyhow::Result;
use statusdeck_core::{Project, ProjectView};
use statusdeck_store::StatusStore;
use tracing::info;

use super::{attribution, fetch_settled, resolve_config};
use crate::output::{JsonFormatter, TextFormatter};
use crate::{Cli, OutputFormat};

/// Runs the projects command.
pub async fn run(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let projects = config.projects();

    info!(projects = projects.len(), slug = %config.slug, "Loading project catalog");

    let mount = fetch_settled(&config).await?;
    let (views, loaded) = project_cards(mount.store(), &projects).await;
    let attribution = attribution(&config);

    match cli.format {
        OutputFormat::Text => {
            let formatter = TextFormatter::new(!cli.no_color);
            println!("{}", formatter.format_projects(&views));
            if loaded {
                println!();
                println!(
                    "{}",
                    formatter.format_footer(
                        attribution.monitored_by.as_deref(),
                        attribution.status_page_url.as_deref()
                    )
                );
            }
        }
        OutputFormat::Json => {
            let formatter = JsonFormatter::new(cli.pretty);
            println!("{}", formatter.format_projects(&views, loaded, attribution)?);
        }
    }

    Ok(())
}

/// Returns the project views and whether the fetch has settled.
///
/// A failed fetch counts as settled: every card reads "Not monitored".
async fn project_cards(store: &StatusStore, projects: &[Project]) -> (Vec<ProjectView>, bool) {
    let views = store.project_views(projects).await;
    (views, store.is_loaded().await)
}
