//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide JSON and table output for alert records.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//!
//! Invariants:
//! - JSON output for an empty list is `[]` so pipelines can always parse it.
//! - Table output for an empty list is a human-readable message.
//! - Missing values render as `-` in tables.

use anyhow::Result;
use chrono::{DateTime, Utc};
use circonus_client::Alert;

/// Placeholder for missing values in table output.
const MISSING_VALUE: &str = "-";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format a list of alerts.
    fn format_alerts(&self, alerts: &[Alert]) -> Result<String>;

    /// Format a single alert in detail.
    fn format_alert_info(&self, alert: &Alert) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_alerts(&self, alerts: &[Alert]) -> Result<String> {
        let mut output = serde_json::to_string_pretty(alerts)?;
        output.push('\n');
        Ok(output)
    }

    fn format_alert_info(&self, alert: &Alert) -> Result<String> {
        let mut output = serde_json::to_string_pretty(alert)?;
        output.push('\n');
        Ok(output)
    }
}

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_alerts(&self, alerts: &[Alert]) -> Result<String> {
        let mut output = String::new();

        if alerts.is_empty() {
            output.push_str("No alerts found.\n");
            return Ok(output);
        }

        output.push_str(&format!(
            "{:<16} {:<4} {:<8} {:<30} {:<24} {:<20}\n",
            "CID", "SEV", "STATE", "CHECK", "METRIC", "OCCURRED"
        ));
        output.push_str(&format!(
            "{:<16} {:<4} {:<8} {:<30} {:<24} {:<20}\n",
            "===", "===", "=====", "=====", "======", "========"
        ));

        for alert in alerts {
            output.push_str(&format!(
                "{:<16} {:<4} {:<8} {:<30} {:<24} {:<20}\n",
                alert.cid,
                alert.severity,
                alert_state(alert),
                truncate(&alert.check_name, 30),
                truncate(&alert.metric_name, 24),
                format_time(alert.occurred_at()),
            ));
        }

        Ok(output)
    }

    fn format_alert_info(&self, alert: &Alert) -> Result<String> {
        let mut output = String::new();

        output.push_str("--- Alert Information ---\n");
        output.push_str(&format!("CID: {}\n", alert.cid));
        output.push_str(&format!("Severity: {}\n", alert.severity));
        output.push_str(&format!("State: {}\n", alert_state(alert)));
        output.push_str(&format!("Check: {} ({})\n", alert.check_name, alert.check_cid));
        output.push_str(&format!("Broker: {}\n", alert.broker_cid));
        output.push_str(&format!("Rule Set: {}\n", alert.rule_set_cid));
        output.push_str(&format!("Metric: {}\n", alert.metric_name));
        output.push_str(&format!("Value: {}\n", alert.value));
        output.push_str(&format!("Occurred: {}\n", format_time(alert.occurred_at())));
        output.push_str(&format!("Cleared: {}\n", format_time(alert.cleared_at())));
        output.push_str(&format!(
            "Cleared Value: {}\n",
            alert.cleared_value.as_deref().unwrap_or(MISSING_VALUE)
        ));
        output.push_str(&format!(
            "Acknowledgement: {}\n",
            alert.acknowledgement_cid.as_deref().unwrap_or(MISSING_VALUE)
        ));
        output.push_str(&format!("Maintenance: {}\n", join_or_missing(&alert.maintenance)));
        output.push_str(&format!("Tags: {}\n", join_or_missing(&alert.tags)));
        if let Some(ref notes) = alert.metric_notes {
            output.push_str(&format!("Notes: {}\n", notes));
        }
        if let Some(ref link) = alert.metric_link_url {
            output.push_str(&format!("Metric Link: {}\n", link));
        }
        output.push_str(&format!("URL: {}\n", alert.alert_url));

        Ok(output)
    }
}

fn alert_state(alert: &Alert) -> &'static str {
    if alert.is_cleared() {
        "cleared"
    } else if alert.is_acknowledged() {
        "acked"
    } else {
        "open"
    }
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| MISSING_VALUE.to_string())
}

fn join_or_missing(values: &[String]) -> String {
    if values.is_empty() {
        MISSING_VALUE.to_string()
    } else {
        values.join(", ")
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() > width {
        let head: String = value.chars().take(width - 3).collect();
        format!("{}...", head)
    } else {
        value.to_string()
    }
}
