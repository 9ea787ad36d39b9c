use async_trait::async_trait;

use crate::Result;

/// Chat notifier Adapter interface
#[cfg_attr(feature = "testkit", mockall::automock)]
#[async_trait(?Send)]
pub trait NotifierService: Send + Sync {
    /// Send a message to a channel.
    async fn message_send(&self, channel_id: &str, content: &str) -> Result<()>;
}
