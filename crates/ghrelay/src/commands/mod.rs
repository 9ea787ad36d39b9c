//! Commands.

use std::io::Write;

use async_trait::async_trait;
use clap::Subcommand;
use ghrelay_config::Config;
use ghrelay_ghapi_interface::ApiService;
use ghrelay_notifier_interface::NotifierService;

use self::{debug::DebugCommand, server::ServerCommand};
use crate::Result;

mod debug;
mod server;

pub(crate) struct CommandContext<W: Write> {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub notifier_service: Box<dyn NotifierService>,
    pub writer: W,
}

#[async_trait(?Send)]
pub(crate) trait Command {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    #[clap(subcommand)]
    Debug(DebugCommand),
}

#[async_trait(?Send)]
impl Command for SubCommand {
    async fn execute<W: Write>(self, ctx: CommandContext<W>) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Debug(sub) => sub.execute(ctx).await,
        }
    }
}
