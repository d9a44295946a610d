//! Main Circonus REST API client and API methods.
//!
//! This module provides the primary [`CirconusClient`] for interacting with
//! the Circonus API.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `alerts`: Alert retrieval and search methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Header construction (delegated to [`crate::auth::ApiCredentials`])

pub mod builder;

mod alerts;

use crate::auth::ApiCredentials;

/// Circonus REST API client.
///
/// # Creating a Client
///
/// Use [`CirconusClient::builder()`] to create a new client:
///
/// ```rust,ignore
/// use circonus_client::{ApiCredentials, CirconusClient};
/// use secrecy::SecretString;
///
/// let client = CirconusClient::builder()
///     .credentials(ApiCredentials::new(SecretString::new("my-token".to_string().into())))
///     .build()?;
/// let alerts = client.fetch_alerts().await?;
/// ```
#[derive(Debug)]
pub struct CirconusClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: ApiCredentials,
    pub(crate) max_retries: usize,
}

impl CirconusClient {
    /// Create a new client builder.
    pub fn builder() -> builder::CirconusClientBuilder {
        builder::CirconusClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the credentials sent with each request.
    pub fn credentials(&self) -> &ApiCredentials {
        &self.credentials
    }
}
