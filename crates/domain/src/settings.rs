//! Client settings
//!
//! Everything the client reads at startup: backend location, timeout,
//! fallback API token and the SSO provider used for login redirects.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{DomainError, DomainResult};
use crate::policy::ErrorPolicyTable;

/// Default backend root.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8088/api";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
/// Default delay before the login redirect fires.
pub const DEFAULT_REDIRECT_DELAY: Duration = Duration::from_millis(1_500);
/// Paths that get the `device` query parameter injected.
pub const DEFAULT_DEVICE_PATH_PATTERN: &str = r"^/public/(products|bundles)(/|$)";

/// External single-sign-on provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SsoSettings {
    /// Root of the identity provider.
    pub base_url: Url,
    /// Client identifier registered with the provider.
    pub client_id: String,
    /// Client secret for the code exchange. Often empty for public clients.
    #[serde(default)]
    pub client_secret: String,
    /// Where the provider sends the user back after login.
    pub redirect_uri: String,
}

impl SsoSettings {
    /// Builds the login page URL carrying the client id and `target` as
    /// the URL-encoded redirect.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be extended with `/login`.
    pub fn login_url(&self, target: &str) -> DomainResult<Url> {
        let raw = format!("{}/login", self.base_url.as_str().trim_end_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("redirect_uri", target);
        Ok(url)
    }

    /// Login URL that returns to the configured redirect URI.
    ///
    /// # Errors
    ///
    /// See [`SsoSettings::login_url`].
    pub fn default_login_url(&self) -> DomainResult<Url> {
        self.login_url(&self.redirect_uri)
    }
}

impl Default for SsoSettings {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            base_url: Url::parse("https://sso.wristo.io").expect("static URL is valid"),
            client_id: "wristo-store".to_string(),
            client_secret: String::new(),
            redirect_uri: "http://localhost:3000/auth/callback".to_string(),
        }
    }
}

/// Settings for one client instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Backend API root; request paths are appended to it.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Bearer token used when nobody is signed in.
    #[serde(default)]
    pub api_token: Option<String>,
    /// Login provider.
    #[serde(default)]
    pub sso: SsoSettings,
    /// Delay between the session-expired notice and the login redirect.
    pub redirect_delay: Duration,
    /// Regex selecting paths that get the `device` parameter.
    pub device_path_pattern: String,
    /// Business code handling.
    #[serde(default)]
    pub error_policies: ErrorPolicyTable,
}

impl ClientSettings {
    /// Creates settings for `base_url` with every other value defaulted.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an absolute URL.
    pub fn for_base_url(base_url: &str) -> DomainResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| DomainError::InvalidUrl(format!("{e}: {base_url}")))?;
        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// Returns the absolute URL for a request path (inline query kept).
    ///
    /// # Errors
    ///
    /// Returns an error if the joined string is not a valid URL.
    pub fn endpoint_url(&self, path: &str) -> DomainResult<Url> {
        let raw = format!("{}{path}", self.base_url.as_str().trim_end_matches('/'));
        Url::parse(&raw).map_err(|e| DomainError::InvalidUrl(format!("{e}: {raw}")))
    }
}

impl Default for ClientSettings {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("static URL is valid"),
            timeout: DEFAULT_TIMEOUT,
            api_token: None,
            sso: SsoSettings::default(),
            redirect_delay: DEFAULT_REDIRECT_DELAY,
            device_path_pattern: DEFAULT_DEVICE_PATH_PATTERN.to_string(),
            error_policies: ErrorPolicyTable::storefront(),
        }
    }
}
