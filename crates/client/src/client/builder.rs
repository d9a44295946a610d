//! Client builder for constructing [`CirconusClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts, TLS verification)
//!
//! # Invariants
//! - Credentials with a non-blank token must be provided before calling `build()`
//! - The base URL defaults to the public API and never ends with a slash
//! - `skip_verify` only affects HTTPS connections; HTTP connections log a warning

use std::time::Duration;

use crate::auth::ApiCredentials;
use crate::client::CirconusClient;
use crate::error::{ClientError, Result};
use circonus_config::{
    Config,
    constants::{DEFAULT_API_URL, DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`CirconusClient`].
pub struct CirconusClientBuilder {
    base_url: Option<String>,
    credentials: Option<ApiCredentials>,
    skip_verify: bool,
    timeout: Duration,
    max_retries: usize,
}

impl Default for CirconusClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl CirconusClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://api.circonus.com/v2`.
    ///
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the token credentials.
    pub fn credentials(mut self, credentials: ApiCredentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this against inside deployments with private certificates.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited or unavailable responses.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(ApiCredentials::from(&config.auth));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`CirconusClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingCredentials`] if no usable token was provided.
    /// Returns [`ClientError::InvalidUrl`] if the base URL is blank.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<CirconusClient> {
        let credentials = self
            .credentials
            .filter(ApiCredentials::has_token)
            .ok_or_else(|| ClientError::MissingCredentials("API token is required".to_string()))?;

        let base_url = Self::normalize_base_url(
            self.base_url
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        );
        if base_url.trim().is_empty() {
            return Err(ClientError::InvalidUrl("base_url is empty".to_string()));
        }

        let mut http_builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if self.skip_verify {
            if base_url.starts_with("https://") {
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(CirconusClient {
            http,
            base_url,
            credentials,
            max_retries: self.max_retries,
        })
    }
}
