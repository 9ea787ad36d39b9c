//! CLI module.

pub(crate) use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use ghrelay_config::Config;
use ghrelay_logging::configure_logging;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;

/// Initialize command line.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    configure_logging(&config)?;
    config_validator::validate_configuration(&config)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        repository_path = %config.repository_path(),
        message = "Configuration loaded"
    );

    let args = Args::parse();
    CommandExecutor::parse_args(config, args)
}
