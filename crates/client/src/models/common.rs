//! Common types shared across Circonus API models.

use serde::Deserialize;

/// Error body returned by the API alongside non-success statuses.
///
/// Every field is optional; proxies in front of the API may return
/// arbitrary JSON or plain text instead.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiErrorBody {
    pub code: Option<String>,
    pub message: Option<String>,
    pub explanation: Option<String>,
    pub reference: Option<String>,
}

impl ApiErrorBody {
    /// Render a single human readable line, or `None` if the body carried
    /// neither a code nor a message.
    pub fn summary(&self) -> Option<String> {
        let text = self.message.as_deref().or(self.explanation.as_deref());
        match (self.code.as_deref(), text) {
            (Some(code), Some(text)) => Some(format!("{}: {}", code, text)),
            (None, Some(text)) => Some(text.to_string()),
            (Some(code), None) => Some(code.to_string()),
            (None, None) => None,
        }
    }
}
