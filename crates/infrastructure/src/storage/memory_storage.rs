//! In-process client storage.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use wristo_application::ports::{ClientStorage, StorageError};

/// Storage that lives as long as the process. Useful for one-shot runs
/// and tests.
#[derive(Debug, Default)]
pub struct MemoryClientStorage {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryClientStorage {
    /// Creates empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ClientStorage for MemoryClientStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        self.values.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.write().await.remove(key);
        Ok(())
    }
}
