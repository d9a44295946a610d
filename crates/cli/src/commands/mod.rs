//! CLI command implementations.

pub mod alerts;

use anyhow::Result;
use circonus_client::CirconusClient;
use circonus_config::Config;

/// Build an API client from the resolved configuration.
pub fn build_client_from_config(config: &Config) -> Result<CirconusClient> {
    Ok(CirconusClient::builder().from_config(config).build()?)
}
