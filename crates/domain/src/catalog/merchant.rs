use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantImage {
    pub id: i64,
    pub url: String,
    #[serde(default)]
    pub alternative_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub formats: Option<HashMap<String, serde_json::Value>>,
}

/// Public storefront page of a designer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicMerchant {
    pub user_id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub banner_image_id: Option<i64>,
    #[serde(default)]
    pub banner_image: Option<MerchantImage>,
    #[serde(default)]
    pub slogan: Option<String>,
    #[serde(default)]
    pub facebook_url: Option<String>,
    #[serde(default)]
    pub instagram_url: Option<String>,
    #[serde(default)]
    pub x_url: Option<String>,
    #[serde(default)]
    pub app_count: Option<u64>,
    #[serde(default)]
    pub total_downloads: Option<u64>,
}
