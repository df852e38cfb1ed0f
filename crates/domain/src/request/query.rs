//! Extra query parameters

use serde::{Deserialize, Serialize};

/// Parameters appended to a request URL, in insertion order.
///
/// Keys may repeat; lookups return the first match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends `key=value`.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Borrowed pairs, ready for URL encoding.
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    /// Number of parameters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no parameter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins() {
        let mut params = QueryParams::new();
        params.push("populate", "*");
        params.push("device", "7");
        params.push("device", "8");

        assert_eq!(params.get("device"), Some("7"));
        assert!(params.contains_key("populate"));
        assert!(!params.contains_key("lang"));
        assert_eq!(params.pairs(), vec![("populate", "*"), ("device", "7"), ("device", "8")]);
    }
}
