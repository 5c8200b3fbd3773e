//! Contact Directory - Main entry point
//!
//! Runs the interactive contact manager on stdin/stdout. Logs go to stderr so
//! they never interleave with the menu.

use anyhow::Result;
use contact_directory::{Config, Console};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env();

    // Initialize logging (stderr only; RUST_LOG wins over LOG_LEVEL)
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| Config::default().log_level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Output format: {:?}", config.output_format);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), &config);

    if let Err(e) = console.run() {
        error!("Console session failed: {}", e);
        return Err(e.into());
    }

    info!("Contact directory shutdown complete");
    Ok(())
}
