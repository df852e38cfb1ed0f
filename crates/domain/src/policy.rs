//! Error handling policy table
//!
//! Maps business codes to how a failed envelope is surfaced. Codes that the
//! calling view renders inline (for example an invalid redeem code) are
//! `Silent`; everything else notifies unless configured otherwise.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::code::BizCode;

/// How a failed envelope with a given code is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Reject without any notification; the caller reports it.
    Silent,
    /// Show one global error notification, then reject.
    #[default]
    Notify,
    /// Treat as an expired session: notify and, on non-public paths,
    /// redirect to the SSO login page.
    SessionExpired,
}

/// Code → policy lookup with a fallback for unlisted codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPolicyTable {
    #[serde(default)]
    entries: HashMap<BizCode, ErrorPolicy>,
    #[serde(default)]
    fallback: ErrorPolicy,
}

impl ErrorPolicyTable {
    /// Creates an empty table where every code uses `fallback`.
    #[must_use]
    pub fn new(fallback: ErrorPolicy) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    /// The storefront's table: payment-code failures are silent, a
    /// `FORBIDDEN` code means the session expired, everything else notifies.
    #[must_use]
    pub fn storefront() -> Self {
        Self::new(ErrorPolicy::Notify)
            .with(BizCode::INVALID_PAYMENT_CODE, ErrorPolicy::Silent)
            .with(BizCode::ALREADY_PAID, ErrorPolicy::Silent)
            .with(BizCode::PRODUCT_NOT_FOUND, ErrorPolicy::Silent)
            .with(BizCode::FORBIDDEN, ErrorPolicy::SessionExpired)
    }

    /// Sets the policy for `code`, replacing any previous entry.
    #[must_use]
    pub fn with(mut self, code: BizCode, policy: ErrorPolicy) -> Self {
        self.entries.insert(code, policy);
        self
    }

    /// Returns the policy for `code`.
    #[must_use]
    pub fn policy_for(&self, code: BizCode) -> ErrorPolicy {
        self.entries.get(&code).copied().unwrap_or(self.fallback)
    }

    /// Returns true if failures with `code` must not notify.
    #[must_use]
    pub fn is_silent(&self, code: BizCode) -> bool {
        self.policy_for(code) == ErrorPolicy::Silent
    }
}

impl Default for ErrorPolicyTable {
    fn default() -> Self {
        Self::storefront()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storefront_table() {
        let table = ErrorPolicyTable::storefront();
        assert!(table.is_silent(BizCode::INVALID_PAYMENT_CODE));
        assert!(table.is_silent(BizCode::ALREADY_PAID));
        assert_eq!(table.policy_for(BizCode::SYSTEM_ERROR), ErrorPolicy::Notify);
        assert_eq!(
            table.policy_for(BizCode::FORBIDDEN),
            ErrorPolicy::SessionExpired
        );
        assert_eq!(table.policy_for(BizCode::new(555)), ErrorPolicy::Notify);
    }

    #[test]
    fn test_override_and_fallback() {
        let table = ErrorPolicyTable::new(ErrorPolicy::Silent)
            .with(BizCode::NOT_FOUND, ErrorPolicy::Notify);
        assert_eq!(table.policy_for(BizCode::NOT_FOUND), ErrorPolicy::Notify);
        assert!(table.is_silent(BizCode::PARAM_ERROR));
    }
}
