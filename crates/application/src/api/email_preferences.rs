//! Email preference endpoints.

use wristo_domain::ApiRequest;
use wristo_domain::catalog::{EmailPreferences, EmailPreferencesUpdate};

use crate::error::ApiResult;

api_view!(
    /// Per-address notification settings, reachable from email links
    /// without signing in.
    EmailPreferencesApi
);

impl EmailPreferencesApi<'_> {
    /// Current preferences for `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn get(&self, email: &str) -> ApiResult<Option<EmailPreferences>> {
        self.client
            .send_optional(ApiRequest::get("/public/email-preferences/get").query("email", email))
            .await
    }

    /// Saves the flags present in `update`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn set(&self, update: &EmailPreferencesUpdate) -> ApiResult<Option<EmailPreferences>> {
        self.client
            .send_optional(ApiRequest::post("/public/email-preferences/set").json(update)?)
            .await
    }

    /// Turns every category on.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn subscribe_all(&self, email: &str, updated_by: Option<&str>) -> ApiResult<Option<EmailPreferences>> {
        self.bulk("/public/email-preferences/subscribe-all", email, updated_by)
            .await
    }

    /// Turns every category off.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn unsubscribe_all(&self, email: &str, updated_by: Option<&str>) -> ApiResult<Option<EmailPreferences>> {
        self.bulk("/public/email-preferences/unsubscribe-all", email, updated_by)
            .await
    }

    async fn bulk(&self, path: &str, email: &str, updated_by: Option<&str>) -> ApiResult<Option<EmailPreferences>> {
        let request = ApiRequest::post(path)
            .query("email", email)
            .query_opt("updatedBy", updated_by.filter(|u| !u.is_empty()));
        self.client.send_optional(request).await
    }
}
