use serde::{Deserialize, Serialize};

use super::bundle::Bundle;
use super::product::ProductBase;
use super::user::UserBase;

/// Body of the redeem-code call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedeemCodeRequest {
    pub code: String,
}

/// Echo of the watch-side purchase request behind a code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequestInfo {
    #[serde(rename = "appid")]
    pub app_id: i64,
    #[serde(rename = "accounttoken")]
    pub account_token: String,
    pub purchase_code: String,
}

/// What a redeem code resolves to: the product and the bundles containing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseData {
    pub product: ProductBase,
    #[serde(default)]
    pub bundles: Vec<Bundle>,
    pub request: PurchaseRequestInfo,
}

/// Body of the bundle ownership check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleCheckRequest {
    pub email: String,
    pub bundle_id: i64,
}

/// Payment provider callback after checkout completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseCallbackRequest {
    pub transaction_id: String,
}

/// Receipt summary returned by the callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSuccess {
    pub txn_id: String,
    pub product_name: String,
    pub grand_total: String,
    pub currency_code: String,
}

/// A stored purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRecord {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub account_token: String,
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub app_id: i64,
    #[serde(default)]
    pub bundle_id: i64,
    #[serde(default)]
    pub is_bundle: bool,
    #[serde(default)]
    pub transaction_id: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub subtotal: f64,
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub grand_total: f64,
    #[serde(default)]
    pub currency_code: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub status_desc: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub user: Option<UserBase>,
    #[serde(default)]
    pub product: Option<ProductBase>,
}
