//! Checkout scratch state that survives a restart.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::RwLock;

use crate::ports::{ClientStorage, StorageError, load_json, save_json};

/// Storage key for [`ShopOptions`].
pub const SHOP_OPTIONS_STORAGE_KEY: &str = "shopOptions";

/// Checkout payloads as handed over between pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopOptions {
    /// Data the checkout page was opened with.
    #[serde(default)]
    pub data: Option<Value>,
    /// Product being bought.
    #[serde(default)]
    pub selected_product: Option<Value>,
    /// Order created for it.
    #[serde(default)]
    pub order: Option<Value>,
}

/// Persisted [`ShopOptions`]. Every change is written through.
#[derive(Clone)]
pub struct ShopOptionsStore {
    storage: Arc<dyn ClientStorage>,
    state: Arc<RwLock<ShopOptions>>,
}

impl ShopOptionsStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self {
            storage,
            state: Arc::new(RwLock::new(ShopOptions::default())),
        }
    }

    /// Loads the persisted options.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage fails or holds an invalid value.
    pub async fn restore(&self) -> Result<(), StorageError> {
        let stored = load_json::<ShopOptions>(self.storage.as_ref(), SHOP_OPTIONS_STORAGE_KEY).await?;
        *self.state.write().await = stored.unwrap_or_default();
        Ok(())
    }

    /// Returns a copy of the options.
    pub async fn snapshot(&self) -> ShopOptions {
        self.state.read().await.clone()
    }

    /// Sets `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be stored.
    pub async fn set_data(&self, data: Option<Value>) -> Result<(), StorageError> {
        self.update(|options| options.data = data).await
    }

    /// Sets `selected_product`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be stored.
    pub async fn set_selected_product(&self, product: Option<Value>) -> Result<(), StorageError> {
        self.update(|options| options.selected_product = product).await
    }

    /// Sets `order`.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be stored.
    pub async fn set_order(&self, order: Option<Value>) -> Result<(), StorageError> {
        self.update(|options| options.order = order).await
    }

    /// Clears everything.
    ///
    /// # Errors
    ///
    /// Returns an error if the options cannot be stored.
    pub async fn reset(&self) -> Result<(), StorageError> {
        self.update(|options| *options = ShopOptions::default()).await
    }

    async fn update(&self, change: impl FnOnce(&mut ShopOptions) + Send) -> Result<(), StorageError> {
        let snapshot = {
            let mut state = self.state.write().await;
            change(&mut *state);
            state.clone()
        };
        save_json(self.storage.as_ref(), SHOP_OPTIONS_STORAGE_KEY, &snapshot).await
    }
}

impl std::fmt::Debug for ShopOptionsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopOptionsStore").finish_non_exhaustive()
    }
}
