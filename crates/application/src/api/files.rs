//! File upload endpoints.

use serde_json::Value;
use wristo_domain::{ApiRequest, FormPart};

use crate::error::ApiResult;

api_view!(
    /// Uploads.
    FilesApi
);

impl FilesApi<'_> {
    /// Uploads an avatar image as the multipart field `file` and returns
    /// whatever the backend reports about the stored file.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn upload_avatar(&self, file_name: &str, bytes: Vec<u8>) -> ApiResult<Option<Value>> {
        let request =
            ApiRequest::post("/files/upload/avatar").multipart(vec![FormPart::file("file", file_name, bytes)]);
        self.client.send_raw(request).await
    }
}
