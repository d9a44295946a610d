//! Alert endpoints for the Circonus alert API.
//!
//! # What this module handles:
//! - Fetching a single alert by CID
//! - Listing all alerts
//! - Searching and filtering alerts through query parameters
//!
//! # What this module does NOT handle:
//! - High-level client wiring (see [`crate::client::alerts`])
//! - Retry policy (see [`crate::endpoints::send_request_with_retry`])

use reqwest::Client;
use tracing::debug;

use crate::auth::ApiCredentials;
use crate::cid;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{Alert, SearchFilter, SearchQuery};

const ALERT_PATH: &str = "/alert";

/// Fetch a single alert.
///
/// `cid` may be a full CID (`/alert/1234`) or a bare id (`1234`). Invalid
/// identifiers are rejected before a request is sent.
pub async fn get_alert(
    client: &Client,
    base_url: &str,
    credentials: &ApiCredentials,
    cid: &str,
    max_retries: usize,
) -> Result<Alert> {
    let alert_cid = cid::alert_cid(cid)?;
    debug!("Fetching alert {}", alert_cid);

    let url = format!("{}{}", base_url, alert_cid);
    let builder = credentials.apply(client.get(&url));
    let response = send_request_with_retry(builder, max_retries).await?;

    response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse alert {}: {}", alert_cid, e))
    })
}

/// List every alert visible to the token.
pub async fn list_alerts(
    client: &Client,
    base_url: &str,
    credentials: &ApiCredentials,
    max_retries: usize,
) -> Result<Vec<Alert>> {
    debug!("Listing alerts");
    fetch_alert_list(client, base_url, credentials, &[], max_retries).await
}

/// Search alerts with a free-text expression and/or field filters.
///
/// With neither a non-empty search nor a non-empty filter this is the same
/// as [`list_alerts`].
pub async fn search_alerts(
    client: &Client,
    base_url: &str,
    credentials: &ApiCredentials,
    search: Option<&SearchQuery>,
    filter: Option<&SearchFilter>,
    max_retries: usize,
) -> Result<Vec<Alert>> {
    let params = search_params(search, filter);
    if params.is_empty() {
        return list_alerts(client, base_url, credentials, max_retries).await;
    }

    debug!(params = params.len(), "Searching alerts");
    fetch_alert_list(client, base_url, credentials, &params, max_retries).await
}

async fn fetch_alert_list(
    client: &Client,
    base_url: &str,
    credentials: &ApiCredentials,
    params: &[(String, String)],
    max_retries: usize,
) -> Result<Vec<Alert>> {
    let url = format!("{}{}", base_url, ALERT_PATH);

    let mut builder = client.get(&url);
    if !params.is_empty() {
        builder = builder.query(params);
    }
    let builder = credentials.apply(builder);

    let response = send_request_with_retry(builder, max_retries).await?;

    let alerts: Vec<Alert> = response.json().await.map_err(|e| {
        ClientError::InvalidResponse(format!("Failed to parse alert list response: {}", e))
    })?;

    debug!("Received {} alerts", alerts.len());
    Ok(alerts)
}

/// Build the query pairs for an alert search, ordered by key.
fn search_params(
    search: Option<&SearchQuery>,
    filter: Option<&SearchFilter>,
) -> Vec<(String, String)> {
    let mut params: Vec<(String, String)> = filter
        .into_iter()
        .flat_map(|f| f.pairs())
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    if let Some(query) = search.filter(|q| !q.is_empty()) {
        params.push(("search".to_string(), query.as_str().to_string()));
    }

    // Stable sort keeps multiple values for one key in insertion order.
    params.sort_by(|a, b| a.0.cmp(&b.0));
    params
}
