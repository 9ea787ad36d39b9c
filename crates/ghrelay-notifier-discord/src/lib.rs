//! Discord notifier crate.
//!
//! Delivers notification messages to Discord channels through the bot API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod discord;
mod errors;

pub use discord::DiscordNotifierService;
pub use errors::DiscordError;
