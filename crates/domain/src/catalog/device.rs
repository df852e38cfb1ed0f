use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Watch model entry in the device picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarminDeviceBase {
    pub id: i64,
    /// Numeric on listing endpoints, textual on profile endpoints.
    #[serde(default)]
    pub device_id: Value,
    pub display_name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub device_family: Option<String>,
}

/// Full device description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GarminDevice {
    #[serde(flatten)]
    pub base: GarminDeviceBase,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub device_group: Option<String>,
    #[serde(default)]
    pub display_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub resolution_height: Option<u32>,
    #[serde(default)]
    pub resolution_width: Option<u32>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub discontinued: Option<bool>,
}
