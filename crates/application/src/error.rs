//! Application error types

use thiserror::Error;
use wristo_domain::{BizCode, DomainError, ErrorEnvelope};

use crate::ports::{StorageError, TransportError};

/// Why an API call was rejected.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The backend answered with a non-success envelope.
    #[error("business error {0}")]
    Business(ErrorEnvelope),

    /// The backend answered with a non-2xx status.
    #[error("HTTP status {status}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Envelope found in the error body, if any.
        envelope: Option<ErrorEnvelope>,
    },

    /// No response was received.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The request could not be built.
    #[error("invalid request: {0}")]
    Domain(#[from] DomainError),

    /// Persisted client state could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// Returns the failed envelope, from either a business rejection or an
    /// error body.
    #[must_use]
    pub const fn envelope(&self) -> Option<&ErrorEnvelope> {
        match self {
            Self::Business(envelope)
            | Self::Http {
                envelope: Some(envelope),
                ..
            } => Some(envelope),
            _ => None,
        }
    }

    /// Returns the business code of a rejected envelope.
    #[must_use]
    pub fn biz_code(&self) -> Option<BizCode> {
        self.envelope().map(|e| e.code)
    }

    /// Returns true if this is a business rejection with `code`.
    #[must_use]
    pub fn is_business(&self, code: BizCode) -> bool {
        matches!(self, Self::Business(envelope) if envelope.code == code)
    }

    /// Returns the HTTP status, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for API calls.
pub type ApiResult<T> = Result<T, ApiError>;
