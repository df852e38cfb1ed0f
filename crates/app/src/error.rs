//! Application error types

use thiserror::Error;
use wristo_application::ApiError;
use wristo_application::ports::{StorageError, TransportError};
use wristo_domain::DomainError;
use wristo_infrastructure::ConfigError;

/// Why a command failed.
#[derive(Debug, Error)]
pub enum AppError {
    /// A setting is malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Client state could not be read or written.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The HTTP client could not be built.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The client could not be built from the settings.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The backend has no such record.
    #[error("{0} not found")]
    NotFound(String),

    /// The command needs a signed-in user.
    #[error("not signed in, run `wristo login-url` first")]
    NotSignedIn,

    /// Output could not be written.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// Output could not be rendered.
    #[error("failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

impl AppError {
    /// Message for a call the backend rejected: its own `msg`, else the
    /// known meaning of the code, else the generic fallback.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Api(err) => err.envelope().map(|e| {
                e.message()
                    .or_else(|| e.code.default_message())
                    .unwrap_or_else(|| e.display_message())
            }),
            _ => None,
        }
    }
}

/// Result type alias for commands.
pub type AppResult<T> = Result<T, AppError>;
