//! REST API endpoint implementations.
//!
//! Free functions taking the HTTP client, base URL and credentials
//! explicitly. [`crate::client::CirconusClient`] wraps them with its stored
//! configuration.

pub mod alerts;
mod request;

pub use alerts::{get_alert, list_alerts, search_alerts};
pub use request::send_request_with_retry;
