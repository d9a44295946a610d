//! API token credentials and request header attachment.
//!
//! Circonus authenticates every request with a static token bound to an
//! application name. There is no login exchange or session renewal.

use reqwest::RequestBuilder;
use reqwest::header::ACCEPT;
use secrecy::{ExposeSecret, SecretString};

use circonus_config::AuthConfig;
use circonus_config::constants::{
    DEFAULT_APP_NAME, HEADER_ACCOUNT_ID, HEADER_APP_NAME, HEADER_AUTH_TOKEN,
};

/// Token credentials sent with each API request.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    token_key: SecretString,
    token_app: String,
    account_id: Option<String>,
}

impl ApiCredentials {
    /// Create credentials for a token, using the default application name.
    pub fn new(token_key: SecretString) -> Self {
        Self {
            token_key,
            token_app: DEFAULT_APP_NAME.to_string(),
            account_id: None,
        }
    }

    /// Override the application name bound to the token.
    pub fn with_app(mut self, token_app: impl Into<String>) -> Self {
        self.token_app = token_app.into();
        self
    }

    /// Act on a specific account.
    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = Some(account_id.into());
        self
    }

    /// The application name sent in `X-Circonus-App-Name`.
    pub fn token_app(&self) -> &str {
        &self.token_app
    }

    /// The account id sent in `X-Circonus-Account-ID`, if any.
    pub fn account_id(&self) -> Option<&str> {
        self.account_id.as_deref()
    }

    /// Whether a non-blank token is present.
    pub fn has_token(&self) -> bool {
        !self.token_key.expose_secret().trim().is_empty()
    }

    /// Attach the token, app name, account and accept headers to a request.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder
            .header(HEADER_AUTH_TOKEN, self.token_key.expose_secret())
            .header(HEADER_APP_NAME, &self.token_app)
            .header(ACCEPT, "application/json");

        match &self.account_id {
            Some(account) => builder.header(HEADER_ACCOUNT_ID, account),
            None => builder,
        }
    }
}

impl From<&AuthConfig> for ApiCredentials {
    fn from(config: &AuthConfig) -> Self {
        Self {
            token_key: config.token_key.clone(),
            token_app: config.token_app.clone(),
            account_id: config.account_id.clone(),
        }
    }
}
