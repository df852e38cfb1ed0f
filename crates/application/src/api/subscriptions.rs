//! Subscription endpoints.

use wristo_domain::ApiRequest;
use wristo_domain::catalog::SubscriptionPlan;

use crate::error::ApiResult;

api_view!(
    /// Plans and the signed-in user's subscription lifecycle.
    SubscriptionsApi
);

impl SubscriptionsApi<'_> {
    /// Plans currently on sale.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn active_plans(&self) -> ApiResult<Vec<SubscriptionPlan>> {
        self.client
            .send_list(ApiRequest::get("/public/subscription/plans/active"))
            .await
    }

    /// Pauses billing.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn pause(&self) -> ApiResult<bool> {
        self.lifecycle("/subscription/pause").await
    }

    /// Cancels at the end of the billing period.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn cancel(&self) -> ApiResult<bool> {
        self.lifecycle("/subscription/cancel").await
    }

    /// Resumes a paused subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn resume(&self) -> ApiResult<bool> {
        self.lifecycle("/subscription/resume").await
    }

    async fn lifecycle(&self, path: &str) -> ApiResult<bool> {
        let done = self.client.send_optional::<bool>(ApiRequest::post(path)).await?;
        Ok(done.unwrap_or(false))
    }
}
