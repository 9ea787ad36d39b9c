//! GitHub types.

mod commits;
mod common;
mod issues;
mod ping;
mod pulls;
mod pushes;

pub use commits::*;
pub use common::*;
pub use issues::*;
pub use ping::*;
pub use pulls::*;
pub use pushes::*;
