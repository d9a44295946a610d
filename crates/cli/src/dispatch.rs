//! Command dispatch logic.
//!
//! Routes parsed CLI arguments to the matching command handler.

use anyhow::Result;
use circonus_config::Config;

use crate::args::{Cli, Commands};
use crate::cancellation::CancellationToken;
use crate::commands;

pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    match cli.command {
        Commands::Alerts { command } => {
            commands::alerts::run(config, command, &cli.output, cancel_token).await?;
        }
    }
    Ok(())
}
