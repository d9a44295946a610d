//! Alert models for the Circonus alert API.
//!
//! # What this module handles:
//! - Deserialization of alert records from `/alert` and `/alert/{id}`
//! - Time conversions for the epoch-second timestamp fields
//!
//! # What this module does NOT handle:
//! - Direct HTTP API calls (see [`crate::endpoints::alerts`])
//! - CID validation (see [`crate::cid`])

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::null_as_default;

/// An alert raised by a rule set against a check's metric.
///
/// Fields the API leaves out or sends as `null` deserialize to their empty value.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Alert {
    /// Alert CID, e.g. `/alert/1234`.
    #[serde(rename = "_cid", deserialize_with = "null_as_default")]
    pub cid: String,
    /// Acknowledgement CID, present while the alert is acknowledged.
    #[serde(rename = "_acknowledgement", skip_serializing_if = "Option::is_none")]
    pub acknowledgement_cid: Option<String>,
    /// Link to the alert in the web UI.
    #[serde(rename = "_alert_url", deserialize_with = "null_as_default")]
    pub alert_url: String,
    /// Broker that ran the check.
    #[serde(rename = "_broker", deserialize_with = "null_as_default")]
    pub broker_cid: String,
    #[serde(rename = "_check", deserialize_with = "null_as_default")]
    pub check_cid: String,
    #[serde(rename = "_check_name", deserialize_with = "null_as_default")]
    pub check_name: String,
    /// Epoch seconds when the alert cleared; absent while still open.
    #[serde(rename = "_cleared_on", skip_serializing_if = "Option::is_none")]
    pub cleared_on: Option<u64>,
    /// Metric value that cleared the alert.
    #[serde(rename = "_cleared_value", skip_serializing_if = "Option::is_none")]
    pub cleared_value: Option<String>,
    /// Maintenance window CIDs covering the alert.
    #[serde(rename = "_maintenance", deserialize_with = "null_as_default")]
    pub maintenance: Vec<String>,
    #[serde(rename = "_metric_link", skip_serializing_if = "Option::is_none")]
    pub metric_link_url: Option<String>,
    #[serde(rename = "_metric_name", deserialize_with = "null_as_default")]
    pub metric_name: String,
    /// Free-text notes attached to the metric.
    #[serde(rename = "_metric_notes", skip_serializing_if = "Option::is_none")]
    pub metric_notes: Option<String>,
    /// Epoch seconds when the alert fired.
    #[serde(rename = "_occurred_on", deserialize_with = "null_as_default")]
    pub occurred_on: u64,
    #[serde(rename = "_rule_set", deserialize_with = "null_as_default")]
    pub rule_set_cid: String,
    /// 1 (most severe) through 5.
    #[serde(rename = "_severity", deserialize_with = "null_as_default")]
    pub severity: u8,
    /// `category:value` tags copied from the check.
    #[serde(rename = "_tags", deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Metric value that triggered the alert.
    #[serde(rename = "_value", deserialize_with = "null_as_default")]
    pub value: String,
}

impl Alert {
    /// Create an empty alert record.
    pub fn new() -> Self {
        Self::default()
    }

    /// When the alert fired, or `None` for an out-of-range timestamp.
    pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
        epoch_to_utc(self.occurred_on)
    }

    /// When the alert cleared, if it has.
    pub fn cleared_at(&self) -> Option<DateTime<Utc>> {
        self.cleared_on.and_then(epoch_to_utc)
    }

    pub fn is_cleared(&self) -> bool {
        self.cleared_on.is_some()
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledgement_cid.is_some()
    }
}

fn epoch_to_utc(secs: u64) -> Option<DateTime<Utc>> {
    i64::try_from(secs)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
}
