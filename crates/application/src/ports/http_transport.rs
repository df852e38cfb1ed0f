//! HTTP transport port

use async_trait::async_trait;
use thiserror::Error;
use wristo_domain::{ApiRequest, TransportResponse};

/// Failures where no HTTP response was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The target URL could not be built.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Anything else the HTTP library reported.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for sending requests to the storefront backend.
///
/// Implementations resolve `request.path` against their base URL, apply
/// their timeout and return whatever status came back; interpreting the
/// status and envelope is the pipeline's job.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Sends one request.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was received.
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError>;
}
