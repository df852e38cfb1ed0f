//! User-facing notices raised by the request pipeline.

use serde::{Deserialize, Serialize};

/// Generic text for failures without a usable response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error, please try again later";
/// Text shown before redirecting to the login page.
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired, please sign in again";
/// Text shown inline when a public endpoint refuses the request.
pub const NO_PERMISSION_MESSAGE: &str = "No access permission";

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Something failed.
    Error,
    /// Something needs the user's attention.
    Warning,
}

/// Where a notice is meant to be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeScope {
    /// Application-wide toast.
    Global,
    /// Next to the content that triggered it.
    Inline,
}

/// A message for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// Severity.
    pub level: NoticeLevel,
    /// Placement.
    pub scope: NoticeScope,
    /// Text to display.
    pub message: String,
}

impl Notice {
    /// A global error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            scope: NoticeScope::Global,
            message: message.into(),
        }
    }

    /// A global warning toast.
    #[must_use]
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            scope: NoticeScope::Global,
            message: message.into(),
        }
    }

    /// An inline error shown where the request was made.
    #[must_use]
    pub fn inline(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            scope: NoticeScope::Inline,
            message: message.into(),
        }
    }
}
