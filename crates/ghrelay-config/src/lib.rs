//! Config module.

use std::env;

/// Relay configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord API root URL.
    pub discord_api_root_url: String,
    /// Discord bot token.
    pub discord_bot_token: String,
    /// Discord channel ID for notifications.
    pub discord_channel_id: String,
    /// GitHub API connect timeout (in milliseconds).
    pub github_api_connect_timeout: u64,
    /// GitHub API root URL.
    pub github_api_root_url: String,
    /// GitHub API personal token.
    pub github_api_token: String,
    /// GitHub webhook secret.
    pub github_webhook_secret: String,
    /// Use bunyan logging.
    pub logging_use_bunyan: bool,
    /// Watched repository name.
    pub repository_name: String,
    /// Watched repository owner.
    pub repository_owner: String,
    /// Server bind IP.
    pub server_bind_ip: String,
    /// Server bind port.
    pub server_bind_port: u16,
    /// Disable webhook signature verification.
    pub server_disable_webhook_signature: bool,
    /// Server workers count.
    pub server_workers_count: Option<u16>,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env() -> Config {
        Config {
            discord_api_root_url: env_to_str(
                "RELAY_DISCORD_API_ROOT_URL",
                "https://discord.com/api/v10",
            ),
            discord_bot_token: env_to_str("RELAY_DISCORD_BOT_TOKEN", ""),
            discord_channel_id: env_to_str("RELAY_DISCORD_CHANNEL_ID", ""),
            github_api_connect_timeout: env_to_u64("RELAY_GITHUB_API_CONNECT_TIMEOUT", 5000),
            github_api_root_url: env_to_str(
                "RELAY_GITHUB_API_ROOT_URL",
                "https://api.github.com",
            ),
            github_api_token: env_to_str("RELAY_GITHUB_API_TOKEN", ""),
            github_webhook_secret: env_to_str("RELAY_GITHUB_WEBHOOK_SECRET", ""),
            logging_use_bunyan: env_to_bool("RELAY_LOGGING_USE_BUNYAN", false),
            repository_name: env_to_str("RELAY_REPOSITORY_NAME", ""),
            repository_owner: env_to_str("RELAY_REPOSITORY_OWNER", ""),
            server_bind_ip: env_to_str("RELAY_SERVER_BIND_IP", "127.0.0.1"),
            server_bind_port: env_to_u16("RELAY_SERVER_BIND_PORT", 8008),
            server_disable_webhook_signature: env_to_bool(
                "RELAY_SERVER_DISABLE_WEBHOOK_SIGNATURE",
                false,
            ),
            server_workers_count: env_to_optional_u16("RELAY_SERVER_WORKERS_COUNT", None),
        }
    }

    /// Full path of the watched repository, in `owner/name` form.
    pub fn repository_path(&self) -> String {
        format!("{}/{}", self.repository_owner, self.repository_name)
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}
