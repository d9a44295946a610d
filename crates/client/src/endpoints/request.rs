//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with a retryable status (429, 502, 503, 504) are
//! resent after 1s, 2s, 4s, ... until `max_retries` is exhausted. Any other
//! non-success status is converted into [`ClientError::ApiError`].

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use circonus_config::constants::DEFAULT_MAX_RETRIES;

use crate::error::{ClientError, Result};
use crate::models::ApiErrorBody;

/// Sends an HTTP request, retrying transient failures with exponential backoff.
///
/// A `max_retries` of 0 uses the default of 3.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when all attempts hit a
/// retryable status, `ClientError::ApiError` for other non-success statuses,
/// and `ClientError::HttpError` for transport failures.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                // Streaming bodies cannot be cloned, so only one attempt is possible.
                debug!("Request builder cannot be cloned, single attempt only");
                let response = builder.send().await?;
                return check_status(response).await;
            }
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if !ClientError::is_retryable_status(status) {
            if attempt > 0 && response.status().is_success() {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff_secs = backoff_secs(attempt);
            debug!(
                status,
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                backoff_secs,
                "Transient failure, retrying with exponential backoff"
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
        } else {
            debug!(
                status,
                attempts = attempt + 1,
                "Max retries exhausted for request"
            );
        }
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

/// Seconds to wait after the given zero-based attempt: 1, 2, 4, ...
///
/// Saturates instead of overflowing for large attempt counts.
fn backoff_secs(attempt: usize) -> u64 {
    2u64.saturating_pow(u32::try_from(attempt).unwrap_or(u32::MAX))
}

/// Pass successful responses through and convert failures into `ApiError`.
async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let parsed = serde_json::from_str::<ApiErrorBody>(&body).ok();
    let reference = parsed.as_ref().and_then(|b| b.reference.clone());
    let message = parsed
        .and_then(|b| b.summary())
        .unwrap_or_else(|| body.trim().to_string());

    Err(ClientError::ApiError {
        status,
        url,
        message,
        reference,
    })
}
