use serde::{Deserialize, Serialize};

use super::device::GarminDevice;
use super::subscription::Subscription;

/// Author/merchant summary embedded in other payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBase {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: i64,
    pub role_name: String,
    pub role_code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: i32,
}

/// Shopper profile attributes collected over time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub watch_model: Option<String>,
    #[serde(default)]
    pub purchase_count: Option<i64>,
    #[serde(default)]
    pub last_purchase_time: Option<String>,
    #[serde(default)]
    pub has_bundle: Option<i32>,
}

/// The signed-in user as returned by `/users/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub last_login_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activated_apps: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<UserRole>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_profile: Option<UserProfile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<GarminDevice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_bound: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_password: Option<bool>,
}

/// Editable profile fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    pub username: String,
    pub nickname: String,
    pub avatar: String,
}

impl UserInfo {
    /// Copies the edited fields into the cached profile.
    pub fn apply(&mut self, update: &UserUpdate) {
        self.username.clone_from(&update.username);
        self.nickname = Some(update.nickname.clone());
        self.avatar = Some(update.avatar.clone());
    }
}
