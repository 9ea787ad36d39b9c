//! Notifier errors.

use thiserror::Error;

/// Notifier error.
#[derive(Debug, Error)]
pub enum NotifierError {
    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `NotifierError`.
pub type Result<T, E = NotifierError> = core::result::Result<T, E>;
