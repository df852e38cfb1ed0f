use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteImage {
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

/// Home page carousel slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeBanner {
    pub id: i64,
    #[serde(default)]
    pub image_id: Option<i64>,
    #[serde(default)]
    pub image: Option<WebsiteImage>,
    #[serde(default)]
    pub link_type: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
    #[serde(default)]
    pub open_target: Option<String>,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub is_active: Option<i32>,
}
