//! Debug commands.

use std::io::Write;

use anyhow::anyhow;
use async_trait::async_trait;
use clap::{Parser, Subcommand};

use super::{Command, CommandContext};
use crate::Result;

/// Debug commands
#[derive(Subcommand)]
pub(crate) enum DebugCommand {
    SendNotification(DebugSendNotificationCommand),
}

#[async_trait(?Send)]
impl Command for DebugCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        match self {
            Self::SendNotification(sub) => sub.execute(ctx).await,
        }
    }
}

/// Send a test notification to the configured channel
#[derive(Parser)]
pub(crate) struct DebugSendNotificationCommand {
    /// Custom message, defaults to "This is a test"
    #[clap(short, long)]
    message: Option<String>,
}

#[async_trait(?Send)]
impl Command for DebugSendNotificationCommand {
    async fn execute<W: Write>(self, mut ctx: CommandContext<W>) -> Result<()> {
        if ctx.config.discord_channel_id.is_empty() {
            return Err(anyhow!("Discord channel ID is not configured."));
        }

        let message = self.message.unwrap_or_else(|| "This is a test".into());
        ctx.notifier_service
            .message_send(&ctx.config.discord_channel_id, &message)
            .await?;

        writeln!(ctx.writer, "Notification sent.")?;
        Ok(())
    }
}
