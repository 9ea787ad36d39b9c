//! GitHub API crate.
//!
//! Contains functions to communicate with the GitHub API.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod auth;
mod errors;
mod github;

pub use errors::GitHubError;
pub use github::GithubApiService;
