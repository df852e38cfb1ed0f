use serde::{Deserialize, Serialize};

/// Mailing preferences for one address. Flags are `0`/`1` on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_notifications: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_receipts: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license_updates: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekly_newsletter: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclusive_promotions: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_offers: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_spotlight: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personalized_recommendations: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_updates: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_announcements: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surveys_feedback: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_unsubscribed: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
}

/// Partial update; unset fields are left unchanged by the backend.
pub type EmailPreferencesUpdate = EmailPreferences;

impl EmailPreferences {
    /// Converts a UI toggle to the wire flag.
    #[must_use]
    pub const fn flag(enabled: bool) -> Option<u8> {
        if enabled { Some(1) } else { Some(0) }
    }

    /// Returns true if the address opted out of everything.
    #[must_use]
    pub fn is_unsubscribed(&self) -> bool {
        self.is_unsubscribed == Some(1)
    }
}
