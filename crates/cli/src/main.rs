//! Circonus CLI - Command-line interface for the Circonus alert API.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Execute alert queries via the shared client library.
//! - Format and display results as JSON or a table.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;
mod formatters;

use args::Cli;
use cancellation::{CancellationToken, is_cancelled_error, print_cancelled_message};
use circonus_config::{Config, ConfigLoader};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Resolve configuration: CLI flags take precedence over environment variables.
///
/// Blank flag values are ignored so the environment can still supply them.
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut loader = ConfigLoader::new();

    if let Some(url) = non_blank(&cli.api_url) {
        loader = loader.with_base_url(url.to_string());
    }
    if let Some(token) = non_blank(&cli.api_token) {
        loader = loader.with_token_key(token.to_string());
    }
    if let Some(app) = non_blank(&cli.api_app) {
        loader = loader.with_token_app(app.to_string());
    }
    if let Some(account_id) = non_blank(&cli.account_id) {
        loader = loader.with_account_id(account_id.to_string());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(std::time::Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if cli.skip_verify {
        loader = loader.with_skip_verify(true);
    }

    Ok(loader.from_env()?.build()?)
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
