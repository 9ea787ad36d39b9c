//! GitHub API interface.

mod errors;
mod interface;
pub mod types;

pub use errors::{ApiError, Result};
pub use interface::ApiService;
#[cfg(feature = "testkit")]
pub use interface::MockApiService;
