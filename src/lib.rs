pub mod cli;
pub mod core;

use crate::core::config::AppConfig;
use anyhow::Result;
use tracing::{debug, info};

/// Commands that need a loaded configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    Invest,
    Quote {
        name: String,
        fund: String,
        amount: String,
    },
    Funds,
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!(?command, "Fund calculator starting...");
    let config = load_config(config_path)?;

    match command {
        AppCommand::Invest => cli::invest::run(&config),
        AppCommand::Quote { name, fund, amount } => cli::quote::run(&name, &fund, &amount, &config),
        AppCommand::Funds => {
            cli::funds::run(&config);
            Ok(())
        }
    }
}
