//! The watch model the shopper browses for.

use std::sync::Arc;

use wristo_domain::catalog::GarminDeviceBase;
use wristo_domain::{DEVICE_STORAGE_KEY, DeviceSelection};

use crate::ports::{ClientStorage, StorageError, load_json, save_json};

/// Reads and writes the selection the auth injector scopes product
/// listings with.
#[derive(Clone)]
pub struct DeviceSelectionStore {
    storage: Arc<dyn ClientStorage>,
}

impl DeviceSelectionStore {
    /// Creates a store over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn ClientStorage>) -> Self {
        Self { storage }
    }

    /// Returns the current selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage fails or holds an invalid value.
    pub async fn current(&self) -> Result<Option<DeviceSelection>, StorageError> {
        load_json(self.storage.as_ref(), DEVICE_STORAGE_KEY).await
    }

    /// Selects `device`.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be stored.
    pub async fn select(&self, device: &DeviceSelection) -> Result<(), StorageError> {
        save_json(self.storage.as_ref(), DEVICE_STORAGE_KEY, device).await
    }

    /// Selects a device from the device list.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection cannot be stored.
    pub async fn select_device(&self, device: &GarminDeviceBase) -> Result<(), StorageError> {
        self.select(&DeviceSelection::from(device)).await
    }

    /// Removes the selection.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(DEVICE_STORAGE_KEY).await
    }
}

impl std::fmt::Debug for DeviceSelectionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceSelectionStore").finish_non_exhaustive()
    }
}
