//! Watch model endpoints.

use wristo_domain::ApiRequest;
use wristo_domain::catalog::{GarminDevice, GarminDeviceBase};

use crate::error::ApiResult;

api_view!(
    /// Supported Garmin devices.
    DevicesApi
);

impl DevicesApi<'_> {
    /// All supported devices.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn list(&self) -> ApiResult<Vec<GarminDeviceBase>> {
        self.client
            .send_list(ApiRequest::get("/public/products/garmin-devices/list"))
            .await
    }

    /// Full description of one device.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn detail(&self, id: i64) -> ApiResult<Option<GarminDevice>> {
        self.client
            .send_optional(ApiRequest::get(format!("/public/products/garmin-devices/get/{id}")))
            .await
    }
}
