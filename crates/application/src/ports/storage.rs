//! Client storage port
//!
//! Key/value persistence for state that outlives a run: the session and the
//! selected device. Values are JSON strings.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from the client storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// The backing store could not be read or written.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// A stored value is not valid for its key.
    #[error("corrupt value under '{key}': {message}")]
    Corrupt {
        /// Key holding the value.
        key: String,
        /// Parser message.
        message: String,
    },
}

/// Port for persisted client state.
#[async_trait]
pub trait ClientStorage: Send + Sync {
    /// Returns the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn set(&self, key: &str, value: String) -> Result<(), StorageError>;

    /// Deletes `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Reads and parses the JSON value under `key`.
///
/// # Errors
///
/// Returns an error if the store fails or the value does not parse.
pub async fn load_json<T: DeserializeOwned>(
    storage: &dyn ClientStorage,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(raw) = storage.get(key).await? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StorageError::Corrupt {
            key: key.to_string(),
            message: e.to_string(),
        })
}

/// Serializes `value` and stores it under `key`.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub async fn save_json<T: Serialize + Sync>(
    storage: &dyn ClientStorage,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Corrupt {
        key: key.to_string(),
        message: e.to_string(),
    })?;
    storage.set(key, raw).await
}
