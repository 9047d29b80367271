//! Folder forest CLI entry point.
//!
//! Loads configuration, initializes logging, reads the folder dataset into
//! memory, and runs one command against it.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use forest_core::config::AppConfig;
use forest_core::config::logging::LoggingConfig;

mod commands;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config.logging);
    tracing::debug!(config = %cli.config, dataset = %config.dataset.path, "Configuration loaded");

    if let Err(e) = cli.execute(config).await {
        output::print_error(&e.message);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging on stderr, leaving stdout to command output.
fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}
