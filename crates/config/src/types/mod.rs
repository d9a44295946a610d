//! Configuration type definitions for the Circonus client.
//!
//! Responsibilities:
//! - Define configuration types for authentication and connections.
//! - Provide serialization helpers for sensitive types (secrets, durations).
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections or request signing (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization helpers (`secret_string`, `duration_seconds`) are private modules.

mod auth;
mod connection;

pub use auth::AuthConfig;
pub use connection::{Config, ConnectionConfig};
