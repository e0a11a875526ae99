//! # Prop CLI
//!
//! Command-line interface over the prop engine.

mod cli;
mod gamelog;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, CliHandler};
use prop_engine::{PropConfig, PropEngine};
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let config = load_config(&cli)?;

    // Initialize logging
    logging::initialize_logging_with_config(&config.logging.level, &config.logging.format)?;
    info!("Starting prop-cli v{}", prop_engine::VERSION);
    debug!("Loaded configuration: {:?}", config);

    // Handle command
    let handler = CliHandler::new(PropEngine::new(config), cli.json);
    handler.handle_command(cli.command).await?;

    Ok(())
}

/// Config file (or defaults), then environment, then command-line flags
fn load_config(cli: &Cli) -> Result<PropConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = PropConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.apply_env().context("Invalid environment configuration")?;
            config
        }
        None => PropConfig::from_env().context("Invalid environment configuration")?,
    };

    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format.clone();
    }
    if cli.recent.is_some() {
        config.analysis.recent_window = cli.recent;
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}
