use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A purchasable subscription plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionPlan {
    pub id: i64,
    pub plan_code: String,
    pub name: String,
    #[serde(default)]
    pub duration_days: i64,
    #[serde(default)]
    pub is_gift: bool,
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub discount_price: f64,
    #[serde(default)]
    pub currency_code: String,
    #[serde(default)]
    pub is_active: i32,
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub paddle_product_id: String,
    #[serde(default)]
    pub paddle_price_id: String,
}

/// Backend subscription state code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    PastDue,
    Paused,
    Trialing,
    Unknown(i32),
}

impl From<i32> for SubscriptionStatus {
    fn from(code: i32) -> Self {
        match code {
            1 => Self::Active,
            2 => Self::Canceled,
            3 => Self::PastDue,
            4 => Self::Paused,
            5 => Self::Trialing,
            other => Self::Unknown(other),
        }
    }
}

impl From<SubscriptionStatus> for i32 {
    fn from(status: SubscriptionStatus) -> Self {
        match status {
            SubscriptionStatus::Active => 1,
            SubscriptionStatus::Canceled => 2,
            SubscriptionStatus::PastDue => 3,
            SubscriptionStatus::Paused => 4,
            SubscriptionStatus::Trialing => 5,
            SubscriptionStatus::Unknown(code) => code,
        }
    }
}

/// Raw subscription object mirrored from the payment provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaddleSubscriptionData {
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub currency_code: String,
    #[serde(default)]
    pub next_billed_at: Option<String>,
    #[serde(default)]
    pub paused_at: Option<String>,
    #[serde(default)]
    pub canceled_at: Option<String>,
    #[serde(default)]
    pub scheduled_change: Option<Value>,
    #[serde(default)]
    pub management_urls: Option<Value>,
}

/// The signed-in user's subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub status: SubscriptionStatus,
    pub name: String,
    pub plan_code: String,
    #[serde(default)]
    pub part_number: Option<String>,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_gift: bool,
    #[serde(default)]
    pub paddle_sub_id: String,
    #[serde(default)]
    pub original_price: f64,
    #[serde(default)]
    pub discount_price: f64,
    #[serde(default)]
    pub currency_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paddle_subscription_data: Option<PaddleSubscriptionData>,
}
