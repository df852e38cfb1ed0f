use serde::{Deserialize, Serialize};

use super::product::ProductBase;
use super::user::UserBase;

/// A set of products sold together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub bundle_id: i64,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub paddle_product_id: String,
    #[serde(default)]
    pub paddle_price_id: String,
    pub bundle_name: String,
    #[serde(default)]
    pub bundle_desc: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_active: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub products: Vec<ProductBase>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<UserBase>,
}
