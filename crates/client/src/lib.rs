//! Circonus REST API client.
//!
//! This crate provides a type-safe client for the Circonus API alert
//! resource: fetching a single alert, listing alerts, and searching alerts
//! with free-text expressions and field filters.

mod auth;
pub mod cid;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::ApiCredentials;
pub use client::CirconusClient;
pub use client::builder::CirconusClientBuilder;
pub use error::{ClientError, Result};
pub use models::{Alert, SearchFilter, SearchQuery};
