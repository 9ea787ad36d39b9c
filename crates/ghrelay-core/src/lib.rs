//! Event normalization.
//!
//! Turns verified GitHub webhook payloads into notification strings ready to
//! be delivered to a chat channel.

mod errors;
mod event_type;
pub mod notifications;

pub use errors::{DomainError, Result};
pub use event_type::{EventType, EventTypeError};
