//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Server error.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Missing webhook signature header.
    #[error("Missing webhook signature.")]
    MissingWebhookSignature,

    /// Invalid webhook signature.
    #[error("Invalid webhook signature.")]
    InvalidWebhookSignature,

    /// I/O error.
    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },

    /// Event normalization error.
    #[error("Domain error,\n  caused by: {}", source)]
    DomainError { source: ghrelay_core::DomainError },

    /// GitHub API error.
    #[error("API error,\n  caused by: {}", source)]
    ApiError {
        source: ghrelay_ghapi_interface::ApiError,
    },

    /// Notifier error.
    #[error("Notifier error,\n  caused by: {}", source)]
    NotifierError {
        source: ghrelay_notifier_interface::NotifierError,
    },

    /// Internal error.
    #[error("Internal error.")]
    InternalError,
}

impl ResponseError for ServerError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": self.to_string()
        }))
    }

    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::InvalidWebhookSignature => StatusCode::FORBIDDEN,
            ServerError::MissingWebhookSignature => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
