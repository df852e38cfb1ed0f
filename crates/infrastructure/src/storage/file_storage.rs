//! File-backed client storage.
//!
//! All keys live in one JSON object file in the platform data directory:
//! - Linux: ~/.local/share/wristo/storage.json
//! - macOS: ~/Library/Application Support/wristo/storage.json
//! - Windows: %APPDATA%/wristo/storage.json

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::warn;
use wristo_application::ports::{ClientStorage, StorageError};

use crate::serialization::{from_json_bytes, to_json_stable_bytes};

/// Stores values in a single JSON file. Writes are serialized through a
/// lock; the file is re-read on every access so other processes' changes
/// are picked up.
#[derive(Debug)]
pub struct FileClientStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileClientStorage {
    /// Creates storage backed by `path`. The file is created on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Creates storage at the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform has no data directory.
    pub fn open_default() -> Result<Self, StorageError> {
        Self::default_path()
            .map(Self::new)
            .ok_or_else(|| StorageError::Unavailable("could not determine data directory".to_string()))
    }

    /// Returns the default storage file path, if available.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|p| p.join("wristo").join("storage.json"))
    }

    /// Returns the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(unavailable(&self.path, &e)),
        };
        from_json_bytes(&content).map_err(|e| StorageError::Corrupt {
            key: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Reads the map for a write. A corrupt file is dropped so the write
    /// replaces it; the flag reports that it must be rewritten.
    async fn read_for_write(&self) -> Result<(BTreeMap<String, String>, bool), StorageError> {
        match self.read_all().await {
            Ok(values) => Ok((values, false)),
            Err(StorageError::Corrupt { message, .. }) => {
                warn!(path = %self.path.display(), error = %message, "Discarding corrupt storage file");
                Ok((BTreeMap::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    /// Writes a sibling temp file and renames it over the target, so an
    /// interrupted write never leaves a truncated file behind.
    async fn write_all(&self, values: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| unavailable(parent, &e))?;
        }
        let content = to_json_stable_bytes(values).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, content)
            .await
            .map_err(|e| unavailable(&staging, &e))?;
        fs::rename(&staging, &self.path)
            .await
            .map_err(|e| unavailable(&self.path, &e))
    }
}

#[async_trait]
impl ClientStorage for FileClientStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let (mut values, _) = self.read_for_write().await?;
        values.insert(key.to_string(), value);
        self.write_all(&values).await
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let (mut values, discarded) = self.read_for_write().await?;
        if values.remove(key).is_some() || discarded {
            self.write_all(&values).await?;
        }
        Ok(())
    }
}

fn unavailable(path: &Path, error: &std::io::Error) -> StorageError {
    StorageError::Unavailable(format!("{}: {error}", path.display()))
}
