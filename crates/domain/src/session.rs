//! Session and persisted client state.
//!
//! The session replaces the ambient user store of a browser app: it is an
//! explicit value owned by the application context and persisted under
//! [`SESSION_STORAGE_KEY`].

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::{GarminDeviceBase, UserInfo};

/// Storage key holding the serialized [`Session`].
pub const SESSION_STORAGE_KEY: &str = "wristo-user";
/// Storage key holding the serialized [`DeviceSelection`].
pub const DEVICE_STORAGE_KEY: &str = "selected-device";

/// Signed-in user state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Access token from the SSO exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Profile of the signed-in user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_info: Option<UserInfo>,
    /// When the token stops being valid, if the issuer said so.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Creates a session for a freshly issued token.
    #[must_use]
    pub fn with_token(token: impl Into<String>, expires_in_secs: Option<i64>, now: DateTime<Utc>) -> Self {
        Self {
            token: Some(token.into()),
            user_info: None,
            expires_at: expires_in_secs
                .filter(|secs| *secs > 0)
                .map(|secs| now + Duration::seconds(secs)),
        }
    }

    /// Returns the token to send as a bearer credential, if still usable.
    #[must_use]
    pub fn bearer_token(&self, now: DateTime<Utc>) -> Option<&str> {
        if self.expires_at.is_some_and(|at| at <= now) {
            return None;
        }
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Returns true if a usable token is held.
    #[must_use]
    pub fn is_authenticated(&self, now: DateTime<Utc>) -> bool {
        self.bearer_token(now).is_some()
    }
}

/// The watch model the shopper picked; scopes product listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSelection {
    /// Backend id sent as the `device` query parameter.
    pub id: i64,
    /// Name shown in the picker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Device image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl From<&GarminDeviceBase> for DeviceSelection {
    fn from(device: &GarminDeviceBase) -> Self {
        Self {
            id: device.id,
            display_name: Some(device.display_name.clone()),
            image_url: device.image_url.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_respects_expiry() {
        let now = Utc::now();
        let session = Session::with_token("abc", Some(60), now);
        assert_eq!(session.bearer_token(now), Some("abc"));
        assert_eq!(session.bearer_token(now + Duration::seconds(61)), None);
    }

    #[test]
    fn test_token_without_expiry() {
        let now = Utc::now();
        let session = Session::with_token("abc", None, now);
        assert!(session.is_authenticated(now + Duration::days(365)));
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let session = Session {
            token: Some(String::new()),
            ..Session::default()
        };
        assert!(!session.is_authenticated(Utc::now()));
    }

    #[test]
    fn test_device_selection_tolerates_extra_fields() {
        let selection: DeviceSelection = serde_json::from_str(
            r#"{"id": 42, "deviceId": 3290, "displayName": "fenix 7", "deviceFamily": "fenix"}"#,
        )
        .unwrap();
        assert_eq!(selection.id, 42);
        assert_eq!(selection.display_name.as_deref(), Some("fenix 7"));
    }
}
