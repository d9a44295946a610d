//! Canonical identifier (CID) normalization and validation.
//!
//! A CID is the resource path of an object, e.g. `/alert/1234`. Callers may
//! pass either the full CID or the bare numeric id.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ClientError, Result};

static ALERT_CID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^/alert/[0-9]+$").expect("alert CID pattern is valid"));

/// Normalize and validate an alert CID.
///
/// A value not starting with `/alert` is treated as a bare id and prefixed,
/// so `"1234"` becomes `/alert/1234` while `"/invalid"` becomes
/// `/alert//invalid` and is rejected. Values that already start with
/// `/alert` are validated as given.
pub fn alert_cid(raw: &str) -> Result<String> {
    normalize("alert", &ALERT_CID, raw)
}

fn normalize(resource: &'static str, pattern: &Regex, raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(ClientError::InvalidCid {
            resource,
            cid: "none".to_string(),
        });
    }

    let cid = if raw.starts_with(&format!("/{}", resource)) {
        raw.to_string()
    } else {
        format!("/{}/{}", resource, raw)
    };

    if !pattern.is_match(&cid) {
        return Err(ClientError::InvalidCid { resource, cid });
    }

    Ok(cid)
}
