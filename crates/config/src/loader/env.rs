//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `CIRCONUS_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Values already set through builder methods are not overwritten.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(key: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(key)
        .map(|raw| {
            raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.base_url().is_none() {
        if let Some(url) = env_var_or_none("CIRCONUS_API_URL") {
            loader.set_base_url(Some(url));
        }
    }
    if !loader.has_token() {
        if let Some(token) = env_var_or_none("CIRCONUS_API_TOKEN") {
            loader.set_token_key(Some(SecretString::new(token.into())));
        }
    }
    if loader.token_app().is_none() {
        if let Some(app) = env_var_or_none("CIRCONUS_API_APP") {
            loader.set_token_app(Some(app));
        }
    }
    if loader.account_id().is_none() {
        if let Some(account) = env_var_or_none("CIRCONUS_ACCOUNT_ID") {
            loader.set_account_id(Some(account));
        }
    }
    if loader.skip_verify().is_none() {
        let skip = parse_env::<bool>("CIRCONUS_SKIP_VERIFY", "must be true or false")?;
        loader.set_skip_verify(skip);
    }
    if loader.timeout().is_none() {
        let secs = parse_env::<u64>("CIRCONUS_TIMEOUT", "must be a number")?;
        loader.set_timeout(secs.map(Duration::from_secs));
    }
    if loader.max_retries().is_none() {
        let retries =
            parse_env::<usize>("CIRCONUS_MAX_RETRIES", "must be a non-negative integer")?;
        loader.set_max_retries(retries);
    }

    Ok(())
}
