//! HTTP methods

use serde::{Deserialize, Serialize};
use std::fmt;

/// The storefront backend only takes reads and form/JSON posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Reads, including searches with query parameters.
    #[default]
    Get,
    /// Writes and code exchanges.
    Post,
}

impl HttpMethod {
    /// Wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&HttpMethod::Post).ok().as_deref(), Some("\"POST\""));
        assert_eq!(HttpMethod::default().to_string(), "GET");
    }
}
