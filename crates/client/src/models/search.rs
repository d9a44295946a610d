//! Search and filter parameters for collection endpoints.
//!
//! A search is a free-text expression evaluated server side, sent as the
//! `search` query parameter. A filter maps field selectors such as
//! `f__cleared_on` to one or more values; each value is sent as its own
//! query pair.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Free-text search expression, e.g. `(host="somehost.example.com")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SearchQuery {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}

impl From<String> for SearchQuery {
    fn from(query: String) -> Self {
        Self(query)
    }
}

/// Field filters keyed by selector, kept in key order so the encoded
/// query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchFilter(BTreeMap<String, Vec<String>>);

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value for `key`, keeping any values already present.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flatten into `(key, value)` pairs, one per value.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .flat_map(|(key, values)| values.iter().map(move |v| (key.as_str(), v.as_str())))
    }
}

impl From<BTreeMap<String, Vec<String>>> for SearchFilter {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

impl<K, V> FromIterator<(K, V)> for SearchFilter
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut filter = Self::new();
        for (key, value) in iter {
            filter.insert(key, value);
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_empty() {
        assert!(SearchQuery::new("").is_empty());
        assert!(SearchQuery::new("  ").is_empty());
        assert!(!SearchQuery::from("(host=\"a\")").is_empty());
    }

    #[test]
    fn test_filter_pairs_sorted_and_flattened() {
        let filter: SearchFilter = [
            ("f__severity", "1"),
            ("f__cleared_on", "null"),
            ("f__severity", "2"),
        ]
        .into_iter()
        .collect();

        let pairs: Vec<_> = filter.pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("f__cleared_on", "null"),
                ("f__severity", "1"),
                ("f__severity", "2"),
            ]
        );
    }

    #[test]
    fn test_filter_deserializes_from_map() {
        let filter: SearchFilter =
            serde_json::from_str(r#"{"f__cleared_on": ["null"]}"#).unwrap();
        assert_eq!(filter, SearchFilter::new().with("f__cleared_on", "null"));
    }
}
