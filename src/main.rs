//! Contact Directory - demonstration entry point
//!
//! Runs the sample walk-through against an in-memory directory and prints
//! each step to stdout.

use anyhow::{Context, Result};
use contact_directory::{demo, Config};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so stdout holds just the demo output)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.log_ansi)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = demo::run_demo(&mut out) {
        error!("Demo failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
