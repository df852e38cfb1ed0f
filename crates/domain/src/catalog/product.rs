use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Uploaded hero image of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroFile {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub provider: String,
}

/// Paddle identifiers used to start a checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default)]
    pub paddle_product_id: String,
    #[serde(default)]
    pub paddle_price_id: String,
}

/// Product card data used in listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductBase {
    pub app_id: i64,
    pub name: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub design_id: String,
    #[serde(default)]
    pub garmin_image_url: String,
    #[serde(default)]
    pub garmin_store_url: String,
    #[serde(default)]
    pub hero_file: Option<HeroFile>,
}

/// Full product record from the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub app_id: i64,
    #[serde(default)]
    pub design_id: String,
    #[serde(default)]
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub garmin_image_url: String,
    #[serde(default)]
    pub garmin_store_url: String,
    #[serde(default)]
    pub garmin_app_uuid: String,
    #[serde(default)]
    pub trial_lasts: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub is_active: i32,
    #[serde(default)]
    pub is_deleted: i32,
    #[serde(default)]
    pub download: i64,
    #[serde(default)]
    pub purchase: i64,
    #[serde(default)]
    pub hero_file: Option<HeroFile>,
    #[serde(default)]
    pub background_file: Option<String>,
    #[serde(default)]
    pub categories: Value,
    #[serde(default)]
    pub package_status: i32,
    #[serde(default)]
    pub payment: Option<Payment>,
}

/// A reference to an uploaded media file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRef {
    pub url: String,
}

/// A product series (category).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub sort: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<MediaRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<MediaRef>,
}

impl Series {
    /// Fills `image` from the hero or banner upload when the backend left it
    /// empty.
    #[must_use]
    pub fn with_resolved_image(mut self) -> Self {
        if self.image.is_none() {
            self.image = self
                .hero
                .as_ref()
                .or(self.banner.as_ref())
                .map(|media| media.url.clone());
        }
        self
    }
}
