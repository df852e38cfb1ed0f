//! Business result codes carried in the response envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Business code from the `code` field of a response envelope.
///
/// Any integer may arrive from the backend, so this is a newtype rather than
/// a closed enum; the known codes are associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BizCode(pub i64);

impl BizCode {
    /// The call succeeded.
    pub const SUCCESS: Self = Self(0);
    /// Unexpected backend failure.
    pub const SYSTEM_ERROR: Self = Self(-1);
    /// Request parameters were rejected.
    pub const PARAM_ERROR: Self = Self(400);
    /// The caller lacks permission, usually an expired session.
    pub const FORBIDDEN: Self = Self(403);
    /// The requested resource does not exist.
    pub const NOT_FOUND: Self = Self(404);
    /// A redeem/payment code was not recognised.
    pub const INVALID_PAYMENT_CODE: Self = Self(1001);
    /// The product behind a payment code was already paid for.
    pub const ALREADY_PAID: Self = Self(1002);
    /// The product referenced by a purchase does not exist.
    pub const PRODUCT_NOT_FOUND: Self = Self(1003);

    /// Creates a code from its raw value.
    #[must_use]
    pub const fn new(code: i64) -> Self {
        Self(code)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }

    /// Returns true for [`BizCode::SUCCESS`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        self.0 == Self::SUCCESS.0
    }

    /// Returns the default English message for known codes.
    #[must_use]
    pub const fn default_message(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("success"),
            -1 => Some("System error"),
            400 => Some("Parameter error"),
            403 => Some("No access permission"),
            404 => Some("Resource not found"),
            1001 => Some("Invalid payment code"),
            1002 => Some("Already paid, no need to repeat"),
            1003 => Some("Product not found"),
            _ => None,
        }
    }
}

impl fmt::Display for BizCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BizCode {
    fn from(code: i64) -> Self {
        Self(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_code() {
        assert!(BizCode::SUCCESS.is_success());
        assert!(!BizCode::SYSTEM_ERROR.is_success());
        assert!(!BizCode::new(1001).is_success());
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(
            BizCode::ALREADY_PAID.default_message(),
            Some("Already paid, no need to repeat")
        );
        assert_eq!(BizCode::new(7777).default_message(), None);
    }

    #[test]
    fn test_transparent_serde() {
        let code: BizCode = serde_json::from_str("1002").unwrap_or(BizCode::SUCCESS);
        assert_eq!(code, BizCode::ALREADY_PAID);
    }
}
