//! Storefront API client
//!
//! [`ApiClient`] is the single funnel every backend call goes through:
//! validate, decorate with the [`AuthInjector`], send over the
//! [`HttpTransport`] and interpret with the [`ResponseNormalizer`].

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use wristo_domain::{ApiRequest, ClientSettings, DomainError};

use crate::api::{
    AuthApi, BlogApi, BundlesApi, ContactApi, DevicesApi, EmailPreferencesApi, FilesApi, MerchantsApi,
    ProductsApi, PurchasesApi, SubscriptionsApi, UserApi, WebsiteApi,
};
use crate::error::{ApiError, ApiResult};
use crate::pipeline::{AuthInjector, ResponseNormalizer};
use crate::ports::{ClientStorage, Clock, HttpTransport, Navigator, Notifier};
use crate::session::SessionContext;

/// The host-provided adapters a client needs.
#[derive(Clone)]
pub struct ClientPorts {
    /// Sends requests.
    pub transport: Arc<dyn HttpTransport>,
    /// Persisted session and device selection.
    pub storage: Arc<dyn ClientStorage>,
    /// Shows notices to the user.
    pub notifier: Arc<dyn Notifier>,
    /// Performs the login redirect.
    pub navigator: Arc<dyn Navigator>,
    /// Current time for token expiry.
    pub clock: Arc<dyn Clock>,
}

struct ClientInner {
    settings: ClientSettings,
    transport: Arc<dyn HttpTransport>,
    storage: Arc<dyn ClientStorage>,
    session: SessionContext,
    injector: AuthInjector,
    normalizer: ResponseNormalizer,
}

/// Cheaply cloneable handle to the storefront backend.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

impl ApiClient {
    /// Creates a client with an anonymous session.
    ///
    /// # Errors
    ///
    /// Returns an error if the device path pattern in `settings` is invalid.
    pub fn new(settings: ClientSettings, ports: ClientPorts) -> Result<Self, DomainError> {
        let session = SessionContext::new(ports.clock);
        let injector = AuthInjector::new(
            session.clone(),
            ports.storage.clone(),
            settings.api_token.clone(),
            &settings.device_path_pattern,
        )?;
        let normalizer = ResponseNormalizer::new(
            settings.error_policies.clone(),
            settings.sso.clone(),
            settings.redirect_delay,
            ports.notifier,
            ports.navigator,
        );
        Ok(Self {
            inner: Arc::new(ClientInner {
                settings,
                transport: ports.transport,
                storage: ports.storage,
                session,
                injector,
                normalizer,
            }),
        })
    }

    /// Returns the shared session.
    #[must_use]
    pub fn session(&self) -> &SessionContext {
        &self.inner.session
    }

    /// Returns the client storage.
    #[must_use]
    pub fn storage(&self) -> &Arc<dyn ClientStorage> {
        &self.inner.storage
    }

    /// Returns the settings the client was built with.
    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.inner.settings
    }

    /// Sends `request` and returns the envelope's `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is invalid or the call fails.
    pub async fn send_raw(&self, request: ApiRequest) -> ApiResult<Option<Value>> {
        request.validate()?;
        let request = self.inner.injector.prepare(request).await;
        debug!(
            request_id = %request.id,
            method = %request.method,
            path = %request.path,
            params = request.query.len(),
            "Dispatching request"
        );
        let outcome = self.inner.transport.send(&request).await;
        if let Ok(response) = &outcome {
            debug!(
                request_id = %request.id,
                status = response.status,
                duration_ms = u64::try_from(response.duration.as_millis()).unwrap_or(u64::MAX),
                "Response received"
            );
        }
        self.inner.normalizer.normalize(&request, outcome)
    }

    /// Sends `request` and decodes `data` as `T`. Absent data decodes from
    /// `null`, so `T` must accept it (for example `Option<_>` or `()`).
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or `data` does not decode.
    pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let path = request.path.clone();
        let data = self.send_raw(request).await?.unwrap_or(Value::Null);
        decode(&path, data)
    }

    /// Sends `request`; absent or `null` data yields `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or `data` does not decode.
    pub async fn send_optional<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<Option<T>> {
        self.send::<Option<T>>(request).await
    }

    /// Sends `request`; absent or `null` data yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or `data` is not a list of `T`.
    pub async fn send_list<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<Vec<T>> {
        Ok(self.send_optional::<Vec<T>>(request).await?.unwrap_or_default())
    }

    /// Sends `request` and discards `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn send_unit(&self, request: ApiRequest) -> ApiResult<()> {
        self.send_raw(request).await.map(|_| ())
    }

    /// Product catalog.
    #[must_use]
    pub const fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(self)
    }

    /// Watch models.
    #[must_use]
    pub const fn devices(&self) -> DevicesApi<'_> {
        DevicesApi::new(self)
    }

    /// Product bundles.
    #[must_use]
    pub const fn bundles(&self) -> BundlesApi<'_> {
        BundlesApi::new(self)
    }

    /// Purchases, redeem codes and PayPal orders.
    #[must_use]
    pub const fn purchases(&self) -> PurchasesApi<'_> {
        PurchasesApi::new(self)
    }

    /// Subscription plans and lifecycle.
    #[must_use]
    pub const fn subscriptions(&self) -> SubscriptionsApi<'_> {
        SubscriptionsApi::new(self)
    }

    /// Blog posts and table of contents.
    #[must_use]
    pub const fn blog(&self) -> BlogApi<'_> {
        BlogApi::new(self)
    }

    /// Public merchant profiles.
    #[must_use]
    pub const fn merchants(&self) -> MerchantsApi<'_> {
        MerchantsApi::new(self)
    }

    /// Website content.
    #[must_use]
    pub const fn website(&self) -> WebsiteApi<'_> {
        WebsiteApi::new(self)
    }

    /// Newsletter.
    #[must_use]
    pub const fn contact(&self) -> ContactApi<'_> {
        ContactApi::new(self)
    }

    /// Email notification preferences.
    #[must_use]
    pub const fn email_preferences(&self) -> EmailPreferencesApi<'_> {
        EmailPreferencesApi::new(self)
    }

    /// Signed-in user profile.
    #[must_use]
    pub const fn user(&self) -> UserApi<'_> {
        UserApi::new(self)
    }

    /// File uploads.
    #[must_use]
    pub const fn files(&self) -> FilesApi<'_> {
        FilesApi::new(self)
    }

    /// SSO code exchange.
    #[must_use]
    pub const fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(self)
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.inner.settings.base_url.as_str())
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned>(path: &str, data: Value) -> ApiResult<T> {
    serde_json::from_value(data).map_err(|e| {
        warn!(%path, error = %e, "Unexpected payload shape");
        ApiError::Decode(format!("{path}: {e}"))
    })
}
