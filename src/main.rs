//! Kumo main entry point
//!
//! Command-line interface for the Kumo web content harvester.

use clap::Parser;
use kumo::config::{load_config, validate, Config};
use kumo::crawler::crawl;
use kumo::output::print_summary;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Kumo: a polite web content harvester
///
/// Kumo crawls every page reachable from the seed URL, fetching each one
/// at most once with a minimum spacing between requests, and stores the
/// content under the output directory sorted by type (javascript, php,
/// other).
#[derive(Parser, Debug)]
#[command(name = "kumo")]
#[command(version)]
#[command(about = "A polite web content harvester", long_about = None)]
struct Cli {
    /// The URL to start crawling from
    #[arg(value_name = "SEED")]
    seed: String,

    /// Path to an optional TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Root directory for stored content (overrides the config file)
    #[arg(short, long, value_name = "DIR")]
    output: Option<String>,

    /// Minimum milliseconds between fetches (overrides the config file)
    #[arg(long, value_name = "MS")]
    rate_interval: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    tracing::info!(
        "Output root: {}, rate interval: {}ms",
        config.output.root_dir,
        config.crawler.rate_interval_millis
    );

    // Per-URL failures are reported inline and do not fail the run; only
    // an invalid seed or a startup problem reaches this error path.
    match crawl(config, &cli.seed).await {
        Ok(stats) => {
            if !cli.quiet {
                print_summary(&stats);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e);
            Err(e.into())
        }
    }
}

/// Assembles the effective configuration from the optional file plus
/// command-line overrides
fn build_config(cli: &Cli) -> Result<Config, kumo::ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(output) = &cli.output {
        config.output.root_dir = output.clone();
    }
    if let Some(interval) = cli.rate_interval {
        config.crawler.rate_interval_millis = interval;
    }

    validate(&config)?;

    Ok(config)
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("kumo=info,warn"),
            1 => EnvFilter::new("kumo=debug,info"),
            2 => EnvFilter::new("kumo=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
