//! Signed-in user state.

use tracing::warn;
use wristo_domain::catalog::{UserInfo, UserUpdate};

use crate::client::ApiClient;
use crate::error::ApiResult;
use crate::ports::StorageError;

/// Session-backed user store. Changes are written through to storage.
#[derive(Debug, Clone)]
pub struct UserStore {
    client: ApiClient,
}

impl UserStore {
    /// Creates a store over the client's session.
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Loads the persisted session into the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub async fn restore(&self) -> Result<bool, StorageError> {
        self.client.session().restore(self.client.storage().as_ref()).await
    }

    /// Returns true if a usable token is held.
    pub async fn is_logged_in(&self) -> bool {
        self.client.session().is_authenticated().await
    }

    /// Returns the cached profile.
    pub async fn user_info(&self) -> Option<UserInfo> {
        self.client.session().user_info().await
    }

    /// Replaces the cached profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cannot be stored.
    pub async fn set_user_info(&self, info: UserInfo) -> Result<(), StorageError> {
        self.client.session().set_user_info(info).await;
        self.persist().await
    }

    /// Re-fetches the profile from the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the session cannot be stored.
    pub async fn refresh(&self) -> ApiResult<Option<UserInfo>> {
        let info = self.client.user().info().await?;
        if let Some(info) = &info {
            self.client.session().set_user_info(info.clone()).await;
            self.persist().await?;
        }
        Ok(info)
    }

    /// Updates the profile and patches the cached copy on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the session cannot be stored.
    pub async fn update_user_info(&self, update: &UserUpdate) -> ApiResult<bool> {
        let done = self.client.user().update_my_info(update).await?;
        self.client.session().update_user_info(update).await;
        self.persist().await?;
        Ok(done)
    }

    /// Logs out on the backend, ignoring its failure, then clears the local
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an error if the cleared session cannot be stored.
    pub async fn logout(&self) -> Result<(), StorageError> {
        if let Err(err) = self.client.user().logout().await {
            warn!(error = %err, "Backend logout failed");
        }
        self.client.session().clear().await;
        self.persist().await
    }

    async fn persist(&self) -> Result<(), StorageError> {
        self.client.session().persist(self.client.storage().as_ref()).await
    }
}
