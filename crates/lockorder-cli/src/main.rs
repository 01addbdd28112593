//! Lockorder CLI - two workers, two locks, one global order
//!
//! Starts workers T1 and T2, each acquiring resource A then resource B, prints
//! their progress to stdout and waits for both before exiting. Diagnostics go
//! to stderr.

use clap::Parser;
use lockorder_core::commands::demo::run_demo;
use lockorder_core::config::DemoConfig;
use lockorder_core::domain::locking::ConsoleSink;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Default log directive when RUST_LOG is unset
const DEFAULT_LOG_DIRECTIVE: &str = "lockorder=info";

#[derive(Parser)]
#[command(name = "lockorder")]
#[command(author, version, about = "Deadlock avoidance by canonical lock ordering", long_about = None)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_DIRECTIVE)),
        )
        .init();

    // Arguments never stop the demo; help and version still print and exit.
    if let Err(e) = Cli::try_parse() {
        if !e.use_stderr() {
            e.exit();
        }
        warn!(kind = ?e.kind(), "Ignoring command-line arguments");
    }
    let config = DemoConfig::default();

    // The exit code never reflects worker failures.
    match run_demo(&config, Arc::new(ConsoleSink)).await {
        Ok(outcome) => {
            info!(workers = outcome.reports.len(), "All workers concluded");
        }
        Err(e) => {
            warn!(code = e.code(), error = %e, "Demo did not complete cleanly");
        }
    }

    Ok(())
}
