//! Raw transport response
//!
//! What the HTTP adapter hands back before the envelope is inspected.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Status, headers and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, lower-cased names.
    #[serde(default)]
    pub headers: HashMap<String, String>,
    /// Raw body.
    #[serde(default)]
    pub body: Vec<u8>,
    /// Time from send to last body byte.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl TransportResponse {
    /// Creates a response from raw parts.
    #[must_use]
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>, duration: Duration) -> Self {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        Self {
            status,
            headers,
            body,
            duration,
        }
    }

    /// Creates a response carrying a JSON body.
    #[must_use]
    pub fn json(status: u16, body: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self {
            status,
            headers,
            body: body.to_string().into_bytes(),
            duration: Duration::ZERO,
        }
    }

    /// Returns true for 2xx statuses.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true for 401 and 403.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self.status, 401 | 403)
    }

    /// Returns a header value by case-insensitive name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

mod duration_millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        let ok = TransportResponse::json(200, &serde_json::json!({"code": 0}));
        assert!(ok.is_success());
        assert!(!ok.is_auth_failure());
        assert_eq!(ok.header("Content-Type"), Some("application/json"));

        let forbidden = TransportResponse::new(403, HashMap::new(), Vec::new(), Duration::ZERO);
        assert!(!forbidden.is_success());
        assert!(forbidden.is_auth_failure());
    }
}
