//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur while building requests or settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The provided URL is invalid or malformed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// A request path does not start with `/`.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// The request body could not be serialized.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// A regular expression in the settings failed to compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
