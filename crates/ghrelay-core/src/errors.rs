//! Domain errors.

use thiserror::Error;

use crate::EventType;

/// Domain error.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A recognized event type carried a payload missing required fields.
    #[error(
        "Malformed payload for event type {},\n  caused by: {}",
        event_type,
        source
    )]
    MalformedEvent {
        event_type: EventType,
        source: serde_json::Error,
    },
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
