//! Shared session context
//!
//! Holds the signed-in user's token and profile. Cloning the context is
//! cheap and every clone sees the same state, so the pipeline and the
//! stores read one session without a global.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::warn;
use wristo_domain::catalog::{SsoTokenResponse, UserInfo, UserUpdate};
use wristo_domain::{SESSION_STORAGE_KEY, Session};

use crate::ports::{ClientStorage, Clock, StorageError, load_json, save_json};

/// Thread-safe handle to the current [`Session`].
#[derive(Clone)]
pub struct SessionContext {
    session: Arc<RwLock<Session>>,
    clock: Arc<dyn Clock>,
}

impl SessionContext {
    /// Creates an anonymous session.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_session(Session::default(), clock)
    }

    /// Creates a context around an existing session.
    #[must_use]
    pub fn with_session(session: Session, clock: Arc<dyn Clock>) -> Self {
        Self {
            session: Arc::new(RwLock::new(session)),
            clock,
        }
    }

    /// Returns a copy of the current session.
    pub async fn snapshot(&self) -> Session {
        self.session.read().await.clone()
    }

    /// Returns the bearer token if one is held and not expired.
    pub async fn bearer_token(&self) -> Option<String> {
        let now = self.clock.now();
        self.session
            .read()
            .await
            .bearer_token(now)
            .map(str::to_string)
    }

    /// Returns true if a usable token is held.
    pub async fn is_authenticated(&self) -> bool {
        self.bearer_token().await.is_some()
    }

    /// Returns the cached profile.
    pub async fn user_info(&self) -> Option<UserInfo> {
        self.session.read().await.user_info.clone()
    }

    /// Replaces the session with a freshly issued token. The previous
    /// profile is dropped.
    pub async fn sign_in(&self, token: &SsoTokenResponse) {
        let session = Session::with_token(token.access_token.clone(), token.expires_in, self.clock.now());
        *self.session.write().await = session;
    }

    /// Stores the profile of the signed-in user.
    pub async fn set_user_info(&self, info: UserInfo) {
        self.session.write().await.user_info = Some(info);
    }

    /// Patches the cached profile. Does nothing if no profile is cached.
    pub async fn update_user_info(&self, update: &UserUpdate) {
        if let Some(info) = self.session.write().await.user_info.as_mut() {
            info.apply(update);
        }
    }

    /// Drops token and profile.
    pub async fn clear(&self) {
        *self.session.write().await = Session::default();
    }

    /// Loads the persisted session. A corrupt value is discarded with a
    /// warning; an unreadable store is an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be read.
    pub async fn restore(&self, storage: &dyn ClientStorage) -> Result<bool, StorageError> {
        match load_json::<Session>(storage, SESSION_STORAGE_KEY).await {
            Ok(Some(session)) => {
                *self.session.write().await = session;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(StorageError::Corrupt { key, message }) => {
                warn!(%key, %message, "Discarding unreadable session");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Writes the session to storage, or removes the key when anonymous.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be written.
    pub async fn persist(&self, storage: &dyn ClientStorage) -> Result<(), StorageError> {
        let session = self.snapshot().await;
        if session.token.is_none() && session.user_info.is_none() {
            storage.remove(SESSION_STORAGE_KEY).await
        } else {
            save_json(storage, SESSION_STORAGE_KEY, &session).await
        }
    }
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext").finish_non_exhaustive()
    }
}
