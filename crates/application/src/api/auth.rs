//! SSO sign-in
//!
//! The login page of the identity provider redirects back with a one-time
//! `code`. [`AuthApi::exchange_code`] trades it for an access token, loads
//! the profile and persists the resulting session.

use tracing::info;
use url::Url;
use wristo_domain::ApiRequest;
use wristo_domain::catalog::{SsoTokenRequest, SsoTokenResponse, UserInfo};

use crate::error::{ApiError, ApiResult};

api_view!(
    /// Sign-in against the configured SSO provider.
    AuthApi
);

impl AuthApi<'_> {
    /// Login page URL returning to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the SSO base URL cannot be extended.
    pub fn login_url(&self, target: &str) -> ApiResult<Url> {
        Ok(self.client.settings().sso.login_url(target)?)
    }

    /// Trades a one-time SSO code for a token without touching the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails or no token is returned.
    pub async fn fetch_token(&self, code: &str) -> ApiResult<SsoTokenResponse> {
        let sso = &self.client.settings().sso;
        let body = SsoTokenRequest {
            code: code.to_string(),
            client_id: sso.client_id.clone(),
            client_secret: sso.client_secret.clone(),
            redirect_uri: sso.redirect_uri.clone(),
        };
        self.client
            .send_optional::<SsoTokenResponse>(ApiRequest::post("/public/sso/token").json(&body)?)
            .await?
            .filter(|token| !token.access_token.is_empty())
            .ok_or_else(|| ApiError::Decode("SSO token response without access token".to_string()))
    }

    /// Completes sign-in: exchanges `code`, stores the token, loads the
    /// profile and persists the session.
    ///
    /// # Errors
    ///
    /// Returns an error if any call fails or the session cannot be stored.
    /// The token stays in memory when only the profile fetch fails.
    pub async fn exchange_code(&self, code: &str) -> ApiResult<Option<UserInfo>> {
        let token = self.fetch_token(code).await?;
        let session = self.client.session();
        session.sign_in(&token).await;

        let user = self.client.user().info().await?;
        if let Some(user) = &user {
            info!(user_id = user.id, "Signed in");
            session.set_user_info(user.clone()).await;
        }
        session.persist(self.client.storage().as_ref()).await?;
        Ok(user)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::error::ApiError;
    use crate::test_support::Harness;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wristo_domain::{RequestBody, SESSION_STORAGE_KEY};

    #[tokio::test]
    async fn test_exchange_code_signs_in_and_persists() {
        let h = Harness::new();
        h.transport
            .push_data(json!({"accessToken": "tok-1", "expiresIn": 3600, "tokenType": "Bearer"}));
        h.transport
            .push_data(json!({"id": 9, "username": "mia", "email": "mia@example.com"}));

        let user = h.client.auth().exchange_code("one-time").await.unwrap().unwrap();
        assert_eq!(user.username, "mia");

        let requests = h.transport.requests();
        assert_eq!(requests[0].path, "/public/sso/token");
        assert_eq!(
            requests[0].body,
            RequestBody::Json(json!({
                "code": "one-time",
                "clientId": "wristo-store",
                "clientSecret": "",
                "redirectUri": "http://localhost:3000/auth/callback"
            }))
        );
        assert_eq!(requests[1].path, "/users/info");
        assert_eq!(requests[1].headers.get("Authorization"), Some("Bearer tok-1"));

        assert!(h.client.session().is_authenticated().await);
        let stored = h.storage.raw(SESSION_STORAGE_KEY).unwrap();
        assert!(stored.contains("tok-1"));
        assert!(stored.contains("mia@example.com"));
    }

    #[tokio::test]
    async fn test_missing_token_is_decode_error() {
        let h = Harness::new();
        let err = h.client.auth().exchange_code("bad").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!h.client.session().is_authenticated().await);
    }

    #[test]
    fn test_login_url() {
        let h = Harness::new();
        let url = h.client.auth().login_url("https://shop/me").unwrap();
        assert_eq!(
            url.as_str(),
            "https://sso.wristo.io/login?client_id=wristo-store&redirect_uri=https%3A%2F%2Fshop%2Fme"
        );
    }
}
