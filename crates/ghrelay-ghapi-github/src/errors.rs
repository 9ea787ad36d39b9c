//! API errors.

use ghrelay_ghapi_interface::ApiError;
use thiserror::Error;

/// GitHub API error.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// Http error.
    #[error("HTTP error,\n  caused by: {}", source)]
    HttpError { source: reqwest::Error },

    /// Token contains characters invalid in a header value.
    #[error("Invalid GitHub API token")]
    InvalidToken,

    /// No commit found on repository.
    #[error("No commit found on repository {}", repository_path)]
    NoCommitFound { repository_path: String },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        Self::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        Self::ImplementationError {
            source: Box::new(e),
        }
    }
}
