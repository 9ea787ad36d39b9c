//! Validation utilities.

use std::fmt::Write;

use ghrelay_config::Config;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        write!(error, "  - Missing env. var.: {}", name).unwrap();
    }

    let mut error = String::new();

    // Check server configuration
    if config.server_bind_ip.is_empty() {
        _missing(&mut error, "RELAY_SERVER_BIND_IP");
    }
    if config.server_bind_port == 0 {
        _missing(&mut error, "RELAY_SERVER_BIND_PORT");
    }

    // Check target repository
    if config.repository_owner.is_empty() {
        _missing(&mut error, "RELAY_REPOSITORY_OWNER");
    }
    if config.repository_name.is_empty() {
        _missing(&mut error, "RELAY_REPOSITORY_NAME");
    }

    // Check GitHub API credentials
    if config.github_api_token.is_empty() {
        _missing(&mut error, "RELAY_GITHUB_API_TOKEN");
    }

    // Check Discord credentials
    if config.discord_bot_token.is_empty() {
        _missing(&mut error, "RELAY_DISCORD_BOT_TOKEN");
    }
    if config.discord_channel_id.is_empty() {
        _missing(&mut error, "RELAY_DISCORD_CHANNEL_ID");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
