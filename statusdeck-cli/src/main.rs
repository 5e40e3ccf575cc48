// Lint configuration for this crate
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! StatusDeck CLI - portfolio projects with live uptime from the command line.
//!
//! # Examples
//!
//! ```bash
//! # Project cards merged with monitoring data
//! statusdeck
//!
//! # Service uptime section
//! statusdeck uptime
//!
//! # Which monitored service matches a URL?
//! statusdeck lookup https://www.syncoli.com/
//!
//! # JSON output against another status page
//! statusdeck --format json --pretty --slug team
//!
//! # Effective configuration
//! statusdeck config show
//! ```

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, fmt, fmt::MakeWriter, prelude::*};

use commands::{config, lookup, projects, uptime};

// ============================================================================
// CLI Definition
// ============================================================================

/// StatusDeck CLI - portfolio projects with live uptime.
#[derive(Parser)]
#[command(name = "statusdeck")]
#[command(about = "Portfolio project catalog with live uptime monitoring")]
#[command(long_about = r#"
StatusDeck fetches a public status page from the monitoring backend and
matches its services against the portfolio project catalog by URL.

Configuration is layered: built-in defaults, then
<config dir>/statusdeck/config.json, then STATUSDECK_API_URL and
STATUSDECK_STATUS_PAGE_SLUG, then the --api-url and --slug flags.

Examples:
  statusdeck                         # Projects with monitoring indicators
  statusdeck uptime                  # Service uptime section
  statusdeck lookup syncoli.com      # Match a single URL
  statusdeck --format json           # JSON output
"#)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run. If none, runs 'projects' by default.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (text or json).
    #[arg(long, short = 'f', default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Monitoring backend base URL.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Status page slug.
    #[arg(long, global = true, value_name = "SLUG")]
    pub slug: Option<String>,

    /// Verbose output (show debug info).
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Quiet mode (minimal output).
    #[arg(long, short, global = true)]
    pub quiet: bool,
}

/// CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show project cards with monitoring indicators (default).
    #[command(visible_alias = "p")]
    Projects,

    /// Show the service uptime section.
    #[command(visible_alias = "u")]
    Uptime,

    /// Show the normalized key and matched service for a URL.
    #[command(visible_alias = "l")]
    Lookup(lookup::LookupArgs),

    /// Inspect configuration.
    Config(config::ConfigArgs),
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text with colors.
    #[default]
    Text,
    /// JSON output for scripting.
    Json,
}

/// CLI exit codes.
#[repr(i32)]
pub enum ExitCode {
    /// General error.
    Error = 1,
    /// Invalid configuration.
    ConfigError = 2,
}

// ============================================================================
// Logging Setup
// ============================================================================

fn setup_logging(verbose: bool, quiet: bool, no_color: bool) {
    if quiet {
        return;
    }

    log_subscriber(verbose, no_color, std::io::stderr).init();
}

fn log_subscriber<W>(
    verbose: bool,
    no_color: bool,
    writer: W,
) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter = if verbose {
        EnvFilter::new("statusdeck=debug,info")
    } else {
        EnvFilter::new("statusdeck=warn")
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_ansi(!no_color)
                .with_writer(writer),
        )
        .with(filter)
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet, cli.no_color);

    let result = match &cli.command {
        Some(Commands::Projects) | None => projects::run(&cli).await,
        Some(Commands::Uptime) => uptime::run(&cli).await,
        Some(Commands::Lookup(args)) => lookup::run(args, &cli).await,
        Some(Commands::Config(args)) => config::run(args, &cli),
    };

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e:#}");
        }
        let code = if e
            .downcast_ref::<statusdeck_store::StoreError>()
            .is_some_and(statusdeck_store::StoreError::is_config)
        {
            ExitCode::ConfigError
        } else {
            ExitCode::Error
        };
        std::process::exit(code as i32);
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn logged(no_color: bool) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = log_subscriber(false, no_color, move || writer.clone());

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!(target: "statusdeck_store", "Status fetch task did not complete");
        });

        String::from_utf8(captured.0.lock().unwrap().clone()).unwrap()
    }

    #[test]
    fn test_no_color_logs_have_no_escapes() {
        let output = logged(true);
        assert!(output.contains("Status fetch task did not complete"));
        assert!(!output.contains('\x1b'));
    }

    #[test]
    fn test_color_logs_are_styled() {
        assert!(logged(false).contains('\x1b'));
    }

    #[test]
    fn test_no_color_flag_parsed() {
        let cli = Cli::parse_from(["statusdeck", "--no-color", "uptime"]);
        assert!(cli.no_color);
    }
}
