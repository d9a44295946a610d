//! Common test utilities for integration tests.
//!
//! Re-exports the types most tests need and builds credentials/clients
//! pointed at a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root

#[allow(unused_imports)]
pub use circonus_client::testing::{load_fixture, sample_alert};

#[allow(unused_imports)]
pub use circonus_client::{ApiCredentials, CirconusClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

pub const TEST_TOKEN: &str = "abc123";
pub const TEST_APP: &str = "test";

/// Credentials matching the header matchers used in the tests.
#[allow(dead_code)]
pub fn test_credentials() -> ApiCredentials {
    ApiCredentials::new(SecretString::new(TEST_TOKEN.to_string().into())).with_app(TEST_APP)
}

/// A client for the given mock server with a single retry.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> CirconusClient {
    CirconusClient::builder()
        .base_url(server.uri())
        .credentials(test_credentials())
        .max_retries(1)
        .build()
        .expect("client should build")
}
