//! Alerts command implementation.
//!
//! Responsibilities:
//! - Fetch a single alert by CID or bare numeric id
//! - List all alerts
//! - Search alerts with a free-text expression and repeated `KEY=VALUE` filters
//!
//! Does NOT handle:
//! - CID validation (handled by the client crate before any request)
//! - Output formatting details (see formatters module)
//!
//! Invariants:
//! - Filters with the same key are sent as repeated query pairs, in the order given

use anyhow::Result;
use circonus_client::{SearchFilter, SearchQuery};
use circonus_config::Config;
use clap::Subcommand;
use tracing::info;

use crate::cancellation::{CancellationToken, Cancelled};
use crate::formatters::{OutputFormat, get_formatter};

#[derive(Subcommand)]
pub enum AlertsCommand {
    /// Show detailed information about one alert
    Get {
        /// Alert CID (e.g. /alert/1234) or bare id (e.g. 1234)
        #[arg(value_name = "CID")]
        cid: String,
    },
    /// List all alerts
    List,
    /// Search alerts by expression and field filters
    Search {
        /// Free-text search expression (e.g. '(host="db01")')
        #[arg(short, long, value_name = "EXPR")]
        search: Option<String>,

        /// Field filter, repeatable (e.g. f__cleared_on=null)
        #[arg(short, long, value_name = "KEY=VALUE", value_parser = parse_filter)]
        filter: Vec<(String, String)>,
    },
}

pub async fn run(
    config: Config,
    command: AlertsCommand,
    output_format: &str,
    cancel: &CancellationToken,
) -> Result<()> {
    let format = OutputFormat::from_str(output_format)?;
    let client = crate::commands::build_client_from_config(&config)?;
    let formatter = get_formatter(format);

    let output = match command {
        AlertsCommand::Get { cid } => {
            info!("Fetching alert {}", cid);
            let alert = tokio::select! {
                res = client.fetch_alert(&cid) => res?,
                _ = cancel.cancelled() => return Err(Cancelled.into()),
            };
            formatter.format_alert_info(&alert)?
        }
        AlertsCommand::List => {
            info!("Listing alerts");
            let alerts = tokio::select! {
                res = client.fetch_alerts() => res?,
                _ = cancel.cancelled() => return Err(Cancelled.into()),
            };
            formatter.format_alerts(&alerts)?
        }
        AlertsCommand::Search { search, filter } => {
            let search = search.map(SearchQuery::new);
            let filter: SearchFilter = filter.into_iter().collect();
            info!(
                "Searching alerts (search: {:?}, filters: {})",
                search.as_ref().map(SearchQuery::as_str),
                filter.pairs().count()
            );
            let alerts = tokio::select! {
                res = client.search_alerts(search.as_ref(), Some(&filter)) => res?,
                _ = cancel.cancelled() => return Err(Cancelled.into()),
            };
            formatter.format_alerts(&alerts)?
        }
    };

    print!("{}", output);
    Ok(())
}

/// Parse a `KEY=VALUE` filter argument. The value may itself contain `=`.
fn parse_filter(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid filter '{}': expected KEY=VALUE", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid filter '{}': key is empty", raw));
    }
    Ok((key.to_string(), value.to_string()))
}
