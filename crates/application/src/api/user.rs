//! Signed-in user endpoints.

use serde::{Deserialize, Serialize};
use wristo_domain::ApiRequest;
use wristo_domain::catalog::{UserInfo, UserUpdate};

use crate::error::ApiResult;

/// Body of [`UserApi::bind_device`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindDeviceRequest {
    /// Device identifier stored on the user profile as the watch model.
    pub device_id: String,
}

api_view!(
    /// Profile of the signed-in user.
    UserApi
);

impl UserApi<'_> {
    /// Profile of the token holder.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn info(&self) -> ApiResult<Option<UserInfo>> {
        self.client.send_optional(ApiRequest::get("/users/info")).await
    }

    /// Updates name, nickname and avatar.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn update_my_info(&self, update: &UserUpdate) -> ApiResult<bool> {
        let done = self
            .client
            .send_optional::<bool>(ApiRequest::post("/users/update/my-info").json(update)?)
            .await?;
        Ok(done.unwrap_or(false))
    }

    /// Binds a watch to the profile.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn bind_device(&self, request: &BindDeviceRequest) -> ApiResult<bool> {
        let done = self
            .client
            .send_optional::<bool>(ApiRequest::post("/users/bind-device").json(request)?)
            .await?;
        Ok(done.unwrap_or(false))
    }

    /// Ends the session on the backend. Local state is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn logout(&self) -> ApiResult<()> {
        self.client.send_unit(ApiRequest::post("/public/auth/logout")).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::test_support::Harness;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wristo_domain::RequestBody;

    #[tokio::test]
    async fn test_bind_device_body() {
        let h = Harness::new();
        h.transport.push_data(json!(true));
        let bound = h
            .client
            .user()
            .bind_device(&BindDeviceRequest {
                device_id: "006-B3290-00".to_string(),
            })
            .await
            .unwrap();
        assert!(bound);
        assert_eq!(
            h.transport.last_request().body,
            RequestBody::Json(json!({"deviceId": "006-B3290-00"}))
        );
    }
}
