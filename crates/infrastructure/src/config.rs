//! Environment configuration
//!
//! Builds [`ClientSettings`] from `WRISTO_*` variables. Unset or empty
//! variables keep their defaults; malformed values are errors.

use std::time::Duration;

use thiserror::Error;
use url::Url;
use wristo_domain::ClientSettings;

/// Backend API root.
pub const ENV_API_BASE_URL: &str = "WRISTO_API_BASE_URL";
/// Request timeout in milliseconds.
pub const ENV_API_TIMEOUT_MS: &str = "WRISTO_API_TIMEOUT_MS";
/// Fallback bearer token for anonymous calls.
pub const ENV_API_TOKEN: &str = "WRISTO_API_TOKEN";
/// SSO provider root.
pub const ENV_SSO_BASE_URL: &str = "WRISTO_SSO_BASE_URL";
/// SSO client id.
pub const ENV_SSO_CLIENT_ID: &str = "WRISTO_SSO_CLIENT_ID";
/// SSO client secret.
pub const ENV_SSO_CLIENT_SECRET: &str = "WRISTO_SSO_CLIENT_SECRET";
/// Where the SSO provider sends the user back.
pub const ENV_SSO_REDIRECT_URI: &str = "WRISTO_SSO_REDIRECT_URI";
/// Delay before the login redirect, in milliseconds.
pub const ENV_REDIRECT_DELAY_MS: &str = "WRISTO_REDIRECT_DELAY_MS";

/// Error type for configuration loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable that must be a URL is not one.
    #[error("{var} is not a valid URL ({value}): {message}")]
    InvalidUrl {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
        /// Parser message.
        message: String,
    },

    /// A variable that must be a non-negative integer is not one.
    #[error("{var} is not a number of milliseconds: {value}")]
    InvalidNumber {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Loads settings through `lookup`, which maps a variable name to its
/// value. Front ends with their own option parsing pass a closure over
/// their parsed options.
///
/// # Errors
///
/// Returns an error if a value is malformed.
pub fn load_settings_with(lookup: impl Fn(&str) -> Option<String>) -> Result<ClientSettings, ConfigError> {
    let get = |var: &'static str| lookup(var).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
    let mut settings = ClientSettings::default();

    if let Some(value) = get(ENV_API_BASE_URL) {
        settings.base_url = parse_url(ENV_API_BASE_URL, value)?;
    }
    if let Some(value) = get(ENV_API_TIMEOUT_MS) {
        settings.timeout = parse_millis(ENV_API_TIMEOUT_MS, value)?;
    }
    settings.api_token = get(ENV_API_TOKEN);

    if let Some(value) = get(ENV_SSO_BASE_URL) {
        settings.sso.base_url = parse_url(ENV_SSO_BASE_URL, value)?;
    }
    if let Some(value) = get(ENV_SSO_CLIENT_ID) {
        settings.sso.client_id = value;
    }
    if let Some(value) = get(ENV_SSO_CLIENT_SECRET) {
        settings.sso.client_secret = value;
    }
    if let Some(value) = get(ENV_SSO_REDIRECT_URI) {
        settings.sso.redirect_uri = value;
    }
    if let Some(value) = get(ENV_REDIRECT_DELAY_MS) {
        settings.redirect_delay = parse_millis(ENV_REDIRECT_DELAY_MS, value)?;
    }

    Ok(settings)
}

fn parse_url(var: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|e| ConfigError::InvalidUrl {
        var,
        message: e.to_string(),
        value,
    })
}

fn parse_millis(var: &'static str, value: String) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidNumber { var, value })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ClientSettings, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        load_settings_with(|var| env.get(var).cloned())
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        assert_eq!(load(&[]).unwrap(), ClientSettings::default());
    }

    #[test]
    fn test_overrides() {
        let settings = load(&[
            (ENV_API_BASE_URL, "https://api.wristo.io/api"),
            (ENV_API_TIMEOUT_MS, "2500"),
            (ENV_API_TOKEN, " api_token "),
            (ENV_SSO_CLIENT_ID, "kiosk"),
            (ENV_REDIRECT_DELAY_MS, "0"),
        ])
        .unwrap();
        assert_eq!(settings.base_url.as_str(), "https://api.wristo.io/api");
        assert_eq!(settings.timeout, Duration::from_millis(2500));
        assert_eq!(settings.api_token.as_deref(), Some("api_token"));
        assert_eq!(settings.sso.client_id, "kiosk");
        assert_eq!(settings.redirect_delay, Duration::ZERO);
    }

    #[test]
    fn test_blank_token_is_unset() {
        assert_eq!(load(&[(ENV_API_TOKEN, "  ")]).unwrap().api_token, None);
    }

    #[test]
    fn test_malformed_values() {
        assert!(matches!(
            load(&[(ENV_API_TIMEOUT_MS, "ten")]),
            Err(ConfigError::InvalidNumber { var: ENV_API_TIMEOUT_MS, .. })
        ));
        assert!(matches!(
            load(&[(ENV_SSO_BASE_URL, "sso.wristo.io")]),
            Err(ConfigError::InvalidUrl { var: ENV_SSO_BASE_URL, .. })
        ));
    }
}
