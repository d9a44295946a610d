//! Authentication types for the Circonus client configuration.
//!
//! Responsibilities:
//! - Define the API token credentials (token, app name, optional account).
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Attaching credentials to requests (see client crate).
//!
//! Invariants:
//! - The API token uses `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets for config file persistence; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_APP_NAME;

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

fn default_app_name() -> String {
    DEFAULT_APP_NAME.to_string()
}

/// Authentication configuration.
///
/// Circonus API tokens are bound to an application name; both are sent on
/// every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The API token.
    #[serde(with = "secret_string")]
    pub token_key: SecretString,
    /// Application name registered for the token.
    #[serde(default = "default_app_name")]
    pub token_app: String,
    /// Account to act on, for tokens with access to several accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
}

impl AuthConfig {
    /// Create credentials for a token using the default application name.
    pub fn new(token_key: SecretString) -> Self {
        Self {
            token_key,
            token_app: default_app_name(),
            account_id: None,
        }
    }
}
