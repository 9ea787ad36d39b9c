//! Notifier errors.

use ghrelay_notifier_interface::NotifierError;
use thiserror::Error;

/// Discord API error.
#[derive(Debug, Error)]
pub enum DiscordError {
    /// Http error.
    #[error("HTTP error,\n  caused by: {}", source)]
    HttpError { source: reqwest::Error },

    /// Token contains characters invalid in a header value.
    #[error("Invalid Discord bot token")]
    InvalidToken,
}

impl From<reqwest::Error> for DiscordError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpError { source: e }
    }
}

impl From<DiscordError> for NotifierError {
    fn from(e: DiscordError) -> Self {
        Self::ImplementationError {
            source: Box::new(e),
        }
    }
}
