//! Plex Sorter CLI
//!
//! Moves watched episodes from an "unsorted" Plex section into the matching
//! show's season folder of a target section.

use clap::Parser;
use plex_sorter::cli::{args::Cli, commands::sort};
use plex_sorter::models::config::{self, Config};
use plex_sorter::preflight;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.debug);

    let config = cli.apply(config::load_config());

    // Run preflight checks unless skipped
    if !cli.skip_preflight {
        run_preflight_checks(&config).await?;
    }

    let report = sort::sort(&config, cli.report.as_deref()).await?;

    if let Some(e) = report.fatal_error() {
        anyhow::bail!("Target library unusable: {}", e);
    }

    Ok(())
}

/// Initialize the logging system.
fn init_logging(debug: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if debug {
        EnvFilter::new("plex_sorter=debug")
    } else {
        EnvFilter::new("plex_sorter=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

/// Run preflight checks and exit if any fail.
async fn run_preflight_checks(config: &Config) -> anyhow::Result<()> {
    use colored::Colorize;

    println!("{}", "Running preflight checks...".bold());
    println!();

    let results = preflight::run_preflight_checks(&config.plex).await?;
    preflight::print_results(&results);

    println!();

    if !preflight::all_passed(&results) {
        anyhow::bail!("Preflight checks failed. Fix the issues above and try again.");
    }

    Ok(())
}
