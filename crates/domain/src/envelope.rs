//! Response envelope
//!
//! Every backend response is wrapped in `{code, msg, data}`. A `code` of
//! [`BizCode::SUCCESS`] means the call succeeded and `data` holds the
//! payload; any other code is a business failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::code::BizCode;

/// Message used when a failed envelope carries no usable `msg`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Request failed";

/// The `{code, msg, data}` wrapper returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T = Value> {
    /// Business result code.
    pub code: BizCode,
    /// Human-readable message. Older endpoints send it as `message`.
    #[serde(default, alias = "message", skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    /// Payload; absent or `null` on many write endpoints.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Returns true if the envelope reports success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.code.is_success()
    }
}

impl ApiEnvelope<Value> {
    /// Splits the envelope into its payload or the failure it describes.
    ///
    /// # Errors
    ///
    /// Returns the [`ErrorEnvelope`] when `code` is not success.
    pub fn into_result(self) -> Result<Option<Value>, ErrorEnvelope> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ErrorEnvelope {
                code: self.code,
                msg: self.msg,
                data: self.data,
            })
        }
    }
}

/// A failed envelope, handed back to callers as the rejection value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Business failure code.
    pub code: BizCode,
    /// Message from the backend, if any.
    #[serde(default, alias = "message")]
    pub msg: Option<String>,
    /// Optional payload attached to the failure.
    #[serde(default)]
    pub data: Option<Value>,
}

impl ErrorEnvelope {
    /// Creates an error envelope with the given code and message.
    #[must_use]
    pub fn new(code: impl Into<BizCode>, msg: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            msg: Some(msg.into()),
            data: None,
        }
    }

    /// Returns the backend message, skipping empty or whitespace-only text.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.msg.as_deref().filter(|m| !m.trim().is_empty())
    }

    /// Returns the message to show a user: the backend `msg`, else the
    /// generic fallback.
    #[must_use]
    pub fn display_message(&self) -> &str {
        self.message().unwrap_or(FALLBACK_ERROR_MESSAGE)
    }
}

impl fmt::Display for ErrorEnvelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "code {}: {}", self.code, self.display_message())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_envelope_unwraps_data() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"code": 0, "msg": "ok", "data": [1, 2]})).unwrap();
        assert_eq!(envelope.into_result().unwrap(), Some(json!([1, 2])));
    }

    #[test]
    fn test_missing_and_null_data_are_none() {
        let missing: ApiEnvelope = serde_json::from_value(json!({"code": 0})).unwrap();
        assert_eq!(missing.into_result().unwrap(), None);

        let null: ApiEnvelope =
            serde_json::from_value(json!({"code": 0, "msg": "", "data": null})).unwrap();
        assert_eq!(null.into_result().unwrap(), None);
    }

    #[test]
    fn test_failure_becomes_error_envelope() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"code": 1001, "msg": "bad code"})).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.code, BizCode::INVALID_PAYMENT_CODE);
        assert_eq!(err.display_message(), "bad code");
    }

    #[test]
    fn test_legacy_message_field() {
        let envelope: ApiEnvelope =
            serde_json::from_value(json!({"code": -1, "message": "boom"})).unwrap();
        let err = envelope.into_result().unwrap_err();
        assert_eq!(err.message(), Some("boom"));
    }

    #[test]
    fn test_display_message_fallback() {
        let err = ErrorEnvelope {
            code: BizCode::SYSTEM_ERROR,
            msg: Some("   ".to_string()),
            data: None,
        };
        assert_eq!(err.display_message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(err.to_string(), "code -1: Request failed");
    }
}
