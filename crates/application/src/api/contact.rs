//! Newsletter endpoints.

use wristo_domain::ApiRequest;

use crate::error::ApiResult;

api_view!(
    /// Newsletter subscription.
    ContactApi
);

impl ContactApi<'_> {
    /// Adds `email` to the newsletter.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn join_newsletter(&self, email: &str) -> ApiResult<()> {
        self.client
            .send_unit(ApiRequest::get("/public/newsletter/subscribe").query("email", email))
            .await
    }

    /// Removes `email` from the newsletter.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn leave_newsletter(&self, email: &str) -> ApiResult<()> {
        self.client
            .send_unit(ApiRequest::get("/public/newsletter/unsubscribe").query("email", email))
            .await
    }
}
