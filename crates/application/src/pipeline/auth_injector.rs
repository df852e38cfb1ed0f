//! Outgoing request decoration: bearer credentials and the selected device.

use std::sync::Arc;

use regex::Regex;
use tracing::{debug, warn};
use wristo_domain::{ApiRequest, DEVICE_STORAGE_KEY, DeviceSelection, DomainError};

use crate::ports::{ClientStorage, load_json};
use crate::session::SessionContext;

const AUTHORIZATION: &str = "Authorization";
const DEVICE_PARAM: &str = "device";

/// Adds credentials and the `device` filter to outgoing requests.
pub struct AuthInjector {
    session: SessionContext,
    storage: Arc<dyn ClientStorage>,
    api_token: Option<String>,
    device_paths: Regex,
}

impl AuthInjector {
    /// Creates an injector.
    ///
    /// # Errors
    ///
    /// Returns an error if `device_path_pattern` is not a valid regex.
    pub fn new(
        session: SessionContext,
        storage: Arc<dyn ClientStorage>,
        api_token: Option<String>,
        device_path_pattern: &str,
    ) -> Result<Self, DomainError> {
        let device_paths = Regex::new(device_path_pattern)
            .map_err(|e| DomainError::InvalidPattern(format!("{device_path_pattern}: {e}")))?;
        Ok(Self {
            session,
            storage,
            api_token: api_token.filter(|t| !t.is_empty()),
            device_paths,
        })
    }

    /// Returns `request` with the `Authorization` header and, for product
    /// listing paths, the `device` query parameter. Never fails.
    pub async fn prepare(&self, mut request: ApiRequest) -> ApiRequest {
        if !request.headers.contains(AUTHORIZATION) {
            let token = match self.session.bearer_token().await {
                Some(token) => Some(token),
                None => self.api_token.clone(),
            };
            if let Some(token) = token {
                request.headers.set(AUTHORIZATION, format!("Bearer {token}"));
            }
        }

        if self.device_paths.is_match(request.path_only()) && !request.has_query_key(DEVICE_PARAM) {
            if let Some(device) = self.selected_device().await {
                debug!(request_id = %request.id, device = device.id, "Scoping request to selected device");
                request = request.query(DEVICE_PARAM, device.id);
            }
        }

        request
    }

    async fn selected_device(&self) -> Option<DeviceSelection> {
        match load_json::<DeviceSelection>(self.storage.as_ref(), DEVICE_STORAGE_KEY).await {
            Ok(device) => device,
            Err(err) => {
                warn!(error = %err, "Ignoring unreadable device selection");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_support::{FixedClock, MemoryStorage};
    use pretty_assertions::assert_eq;
    use wristo_domain::catalog::SsoTokenResponse;
    use wristo_domain::settings::DEFAULT_DEVICE_PATH_PATTERN;

    fn injector(storage: MemoryStorage, api_token: Option<&str>) -> (AuthInjector, SessionContext) {
        let session = SessionContext::new(Arc::new(FixedClock::default()));
        let injector = AuthInjector::new(
            session.clone(),
            Arc::new(storage),
            api_token.map(str::to_string),
            DEFAULT_DEVICE_PATH_PATTERN,
        )
        .unwrap();
        (injector, session)
    }

    fn device_storage() -> MemoryStorage {
        MemoryStorage::with(DEVICE_STORAGE_KEY, r#"{"id":42,"displayName":"fenix 7"}"#)
    }

    #[tokio::test]
    async fn test_device_injected_on_product_paths() {
        let (injector, _) = injector(device_storage(), None);
        let req = injector.prepare(ApiRequest::get("/public/products/hot")).await;
        assert_eq!(req.query.get("device"), Some("42"));

        let req = injector.prepare(ApiRequest::get("/public/bundles/9?populate=*")).await;
        assert_eq!(req.query.get("device"), Some("42"));
    }

    #[tokio::test]
    async fn test_explicit_device_preserved() {
        let (injector, _) = injector(device_storage(), None);

        let inline = injector.prepare(ApiRequest::get("/public/products/hot?device=7")).await;
        assert!(inline.query.is_empty());
        assert_eq!(inline.path, "/public/products/hot?device=7");

        let param = injector
            .prepare(ApiRequest::get("/public/products/hot").query("device", 7))
            .await;
        assert_eq!(param.query.len(), 1);
        assert_eq!(param.query.get("device"), Some("7"));
    }

    #[tokio::test]
    async fn test_device_not_injected_elsewhere() {
        let (injector, _) = injector(device_storage(), None);
        for path in ["/public/blog/list", "/products/search", "/public/productsx"] {
            let req = injector.prepare(ApiRequest::get(path)).await;
            assert!(!req.has_query_key("device"), "{path}");
        }
    }

    #[tokio::test]
    async fn test_storage_failure_is_swallowed() {
        let (unreadable, _) = injector(MemoryStorage::broken(), None);
        let req = unreadable.prepare(ApiRequest::get("/public/products/new")).await;
        assert!(req.query.is_empty());

        let (garbled, _) = injector(MemoryStorage::with(DEVICE_STORAGE_KEY, "garbage"), None);
        let req = garbled.prepare(ApiRequest::get("/public/products/new")).await;
        assert!(req.query.is_empty());
    }

    #[tokio::test]
    async fn test_bearer_prefers_session_token() {
        let (injector, session) = injector(MemoryStorage::default(), Some("static"));

        let anonymous = injector.prepare(ApiRequest::get("/users/info")).await;
        assert_eq!(anonymous.headers.get("authorization"), Some("Bearer static"));

        session
            .sign_in(&SsoTokenResponse {
                access_token: "user-token".to_string(),
                expires_in: None,
                refresh_token: None,
                token_type: None,
                id_token: None,
            })
            .await;
        let signed_in = injector.prepare(ApiRequest::get("/users/info")).await;
        assert_eq!(signed_in.headers.get("Authorization"), Some("Bearer user-token"));
    }

    #[tokio::test]
    async fn test_no_credentials_no_header() {
        let (injector, _) = injector(MemoryStorage::default(), Some(""));
        let req = injector.prepare(ApiRequest::get("/users/info")).await;
        assert!(!req.headers.contains("Authorization"));
    }

    #[test]
    fn test_invalid_pattern_rejected() {
        let session = SessionContext::new(Arc::new(FixedClock::default()));
        let result = AuthInjector::new(session, Arc::new(MemoryStorage::default()), None, "(");
        assert!(matches!(result, Err(DomainError::InvalidPattern(_))));
    }
}
