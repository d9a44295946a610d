//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Bind global connection options to their `CIRCONUS_*` environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration values (see `circonus_config::ConfigLoader`).

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "circonus-cli")]
#[command(about = "Circonus CLI - Query Circonus alerts from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  circonus-cli alerts get 1234\n  circonus-cli alerts list --output json\n  circonus-cli alerts search --search '(host=\"db01\")' --filter f__cleared_on=null\n"
)]
pub struct Cli {
    /// Base URL of the Circonus API (e.g., https://api.circonus.com/v2)
    #[arg(long, global = true, env = "CIRCONUS_API_URL")]
    pub api_url: Option<String>,

    /// API token sent as X-Circonus-Auth-Token
    #[arg(short = 't', long, global = true, env = "CIRCONUS_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Application name the token is registered to
    #[arg(long, global = true, env = "CIRCONUS_API_APP")]
    pub api_app: Option<String>,

    /// Account ID for tokens with access to multiple accounts
    #[arg(long, global = true, env = "CIRCONUS_ACCOUNT_ID")]
    pub account_id: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CIRCONUS_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for rate-limited or unavailable responses
    #[arg(long, global = true, env = "CIRCONUS_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch, list, and search alerts
    Alerts {
        #[command(subcommand)]
        command: commands::alerts::AlertsCommand,
    },
}
