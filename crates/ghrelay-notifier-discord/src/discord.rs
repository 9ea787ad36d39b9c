//! Discord adapter.

use async_trait::async_trait;
use ghrelay_config::Config;
use ghrelay_notifier_interface::{NotifierService, Result};
use http::{header, HeaderMap};
use reqwest::Client;
use serde::Serialize;

use crate::errors::DiscordError;

/// Discord notifier implementation.
#[derive(Clone)]
pub struct DiscordNotifierService {
    config: Config,
}

impl DiscordNotifierService {
    /// Creates new Discord notifier.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<Client, DiscordError> {
        const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bot {}", self.config.discord_bot_token))
                .map_err(|_| DiscordError::InvalidToken)?,
        );

        Ok(Client::builder()
            .user_agent(format!("ghrelay/{APP_VERSION}"))
            .default_headers(headers)
            .build()?)
    }

    fn build_url(&self, path: String) -> String {
        format!("{}{}", self.config.discord_api_root_url, path)
    }
}

#[async_trait(?Send)]
impl NotifierService for DiscordNotifierService {
    #[tracing::instrument(skip(self, content))]
    async fn message_send(&self, channel_id: &str, content: &str) -> Result<()> {
        #[derive(Serialize)]
        struct Request<'a> {
            content: &'a str,
        }

        self.get_client()?
            .post(self.build_url(format!("/channels/{channel_id}/messages")))
            .json(&Request { content })
            .send()
            .await
            .map_err(DiscordError::from)?
            .error_for_status()
            .map_err(DiscordError::from)?;

        Ok(())
    }
}
