//! Purchase endpoints: bundle checkout, redeem codes and PayPal orders.

use serde_json::Value;
use wristo_domain::catalog::{
    Bundle, BundleCheckRequest, PurchaseCallbackRequest, PurchaseData, PurchaseRecord, PurchaseSuccess,
    RedeemCodeRequest,
};
use wristo_domain::{ApiRequest, encode_segment};

use crate::error::ApiResult;

api_view!(
    /// Checkout and payment confirmation.
    PurchasesApi
);

impl PurchasesApi<'_> {
    /// Bundles offered at checkout.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn bundles_for_purchase(&self) -> ApiResult<Vec<Bundle>> {
        self.client.send_list(ApiRequest::get("/public/purchase/bundles")).await
    }

    /// Looks up an existing bundle purchase for an email address.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn check_bundle(&self, request: &BundleCheckRequest) -> ApiResult<Option<PurchaseRecord>> {
        self.client
            .send_optional(ApiRequest::post("/public/purchase/bundle/check").json(request)?)
            .await
    }

    /// Confirms a completed payment by transaction id.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn callback(&self, transaction_id: &str) -> ApiResult<Option<PurchaseSuccess>> {
        let body = PurchaseCallbackRequest {
            transaction_id: transaction_id.to_string(),
        };
        self.client
            .send_optional(ApiRequest::post("/public/purchase/callback").json(&body)?)
            .await
    }

    /// Redeems a purchase code shown on the watch. Invalid or already used
    /// codes come back as silent business errors for the caller to render.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or the code is rejected.
    pub async fn redeem_code(&self, code: &str) -> ApiResult<Option<PurchaseData>> {
        let body = RedeemCodeRequest {
            code: code.trim().to_string(),
        };
        self.client
            .send_optional(ApiRequest::post("/trials/v1/purchase").json(&body)?)
            .await
    }

    /// Creates a PayPal order. The payload is passed through unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn create_paypal_order(&self, order: &Value) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post("/paypal/orders").json(order)?)
            .await
    }

    /// Captures an approved PayPal order.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn capture_paypal_order(&self, order_id: &str) -> ApiResult<Value> {
        self.client
            .send(ApiRequest::post(format!(
                "/paypal/orders/{}/capture",
                encode_segment(order_id)
            )))
            .await
    }
}
