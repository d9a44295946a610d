//! Testing utilities for Circonus client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use circonus_client::testing::{load_fixture, sample_alert};
//!
//! let fixture = load_fixture("alerts/get_alert.json");
//! let alert = sample_alert(42);
//! ```

use std::path::Path;

use crate::models::Alert;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// Build an open, unacknowledged alert with the given numeric id.
pub fn sample_alert(id: u64) -> Alert {
    Alert {
        cid: format!("/alert/{}", id),
        alert_url: format!("https://example.circonus.com/fault-detection?alert_id={}", id),
        broker_cid: "/broker/1".to_string(),
        check_cid: format!("/check/{}", id),
        check_name: format!("check {}", id),
        metric_name: "duration".to_string(),
        occurred_on: 1_483_033_102 + id,
        rule_set_cid: format!("/rule_set/{}_duration", id),
        severity: 1,
        tags: vec!["env:test".to_string()],
        value: "500".to_string(),
        ..Alert::default()
    }
}
