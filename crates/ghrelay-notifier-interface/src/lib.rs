//! Chat notifier interface.

mod errors;
mod interface;

pub use errors::{NotifierError, Result};
pub use interface::NotifierService;
#[cfg(feature = "testkit")]
pub use interface::MockNotifierService;
