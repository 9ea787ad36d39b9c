use std::io::Write;

use clap::Parser;
use ghrelay_config::Config;
use ghrelay_ghapi_github::GithubApiService;
use ghrelay_notifier_discord::DiscordNotifierService;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// GitHub to Discord relay
#[derive(Parser)]
#[clap(author, version, about, long_about = None, name = "ghrelay")]
#[clap(propagate_version = true)]
pub struct Args {
    #[clap(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async {
            let api_service = GithubApiService::new(config.clone());
            let notifier_service = DiscordNotifierService::new(config.clone());
            let ctx = CommandContext {
                config,
                api_service: Box::new(api_service),
                notifier_service: Box::new(notifier_service),
                writer: Box::new(std::io::stdout()),
            };

            Self::parse_args_async(args, ctx).await
        };

        actix_rt::System::with_tokio_rt(|| {
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap()
        })
        .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async<W: Write>(
        args: Args,
        ctx: CommandContext<W>,
    ) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
