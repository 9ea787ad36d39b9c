//! Server module.

#![warn(clippy::all)]

pub mod constants;
pub mod errors;
mod health;
pub mod middlewares;
mod queries;
pub mod server;
pub mod utils;
mod webhook;

pub use errors::{Result, ServerError};
