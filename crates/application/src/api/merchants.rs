//! Merchant endpoints.

use wristo_domain::ApiRequest;
use wristo_domain::catalog::PublicMerchant;

use crate::error::ApiResult;

api_view!(
    /// Public designer profiles.
    MerchantsApi
);

impl MerchantsApi<'_> {
    /// Top merchants; `limit` is omitted when `None` or zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn top(&self, limit: Option<u32>) -> ApiResult<Vec<PublicMerchant>> {
        let request = ApiRequest::get("/public/merchants/top").query_opt("limit", limit.filter(|l| *l > 0));
        self.client.send_list(request).await
    }

    /// Every merchant with banner images.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn all(&self) -> ApiResult<Vec<PublicMerchant>> {
        self.client
            .send_list(ApiRequest::get("/public/merchants/all?populate=image"))
            .await
    }

    /// One merchant by user id.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn detail(&self, user_id: i64) -> ApiResult<Option<PublicMerchant>> {
        let request = ApiRequest::get("/public/merchants/detail")
            .query("userId", user_id)
            .query("populate", "image");
        self.client.send_optional(request).await
    }
}
