//! Bundle endpoints.

use wristo_domain::ApiRequest;
use wristo_domain::catalog::Bundle;

use crate::error::ApiResult;

api_view!(
    /// Product bundles.
    BundlesApi
);

impl BundlesApi<'_> {
    /// One bundle with its products. `device` overrides the stored device
    /// selection for this call.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn by_id(&self, bundle_id: i64, device: Option<i64>) -> ApiResult<Option<Bundle>> {
        let request = ApiRequest::get(format!("/public/bundles/{bundle_id}"))
            .query("populate", "*")
            .query_opt("device", device);
        self.client.send_optional(request).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use crate::test_support::{Harness, MemoryStorage};
    use pretty_assertions::assert_eq;
    use wristo_domain::DEVICE_STORAGE_KEY;

    #[tokio::test]
    async fn test_explicit_device_wins_over_selection() {
        let h = Harness::with_storage(MemoryStorage::with(DEVICE_STORAGE_KEY, r#"{"id":42}"#));
        h.client.bundles().by_id(5, Some(7)).await.unwrap();
        let sent = h.transport.last_request();
        assert_eq!(sent.path, "/public/bundles/5");
        assert_eq!(sent.query.get("populate"), Some("*"));
        assert_eq!(sent.query.get("device"), Some("7"));
        assert_eq!(sent.query.len(), 2);
    }

    #[tokio::test]
    async fn test_selection_used_without_override() {
        let h = Harness::with_storage(MemoryStorage::with(DEVICE_STORAGE_KEY, r#"{"id":42}"#));
        h.client.bundles().by_id(5, None).await.unwrap();
        assert_eq!(h.transport.last_request().query.get("device"), Some("42"));
    }
}
