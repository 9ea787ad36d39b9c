//! Auth.

use std::time::Duration;

use ghrelay_config::Config;
use http::{header, HeaderMap};
use reqwest::ClientBuilder;

use crate::errors::GitHubError;

/// Get an authenticated GitHub client builder.
pub fn get_authenticated_client_builder(config: &Config) -> Result<ClientBuilder, GitHubError> {
    let builder = get_anonymous_client_builder(config);
    let token = &config.github_api_token;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::AUTHORIZATION,
        header::HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GitHubError::InvalidToken)?,
    );

    Ok(builder.default_headers(headers))
}

/// Get anonymous GitHub client builder.
pub fn get_anonymous_client_builder(config: &Config) -> ClientBuilder {
    const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static("application/vnd.github+json"),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.github_api_connect_timeout))
        .user_agent(format!("ghrelay/{APP_VERSION}"))
        .default_headers(headers)
}

/// Build a GitHub URL.
pub fn build_github_url<T: Into<String>>(config: &Config, path: T) -> String {
    format!("{}{}", config.github_api_root_url, path.into())
}
