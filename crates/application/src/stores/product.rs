//! Product listings for the storefront pages.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::error;
use wristo_domain::catalog::{PageResult, Product, Series};

use crate::client::ApiClient;
use crate::error::ApiError;

/// Last loaded listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductState {
    /// Results of the last search.
    pub search_results: Vec<Product>,
    /// Newest products.
    pub new_products: Vec<Product>,
    /// All series.
    pub series: Vec<Series>,
    /// Best sellers.
    pub hot_products: Vec<Product>,
    /// Featured series.
    pub hot_series: Vec<Series>,
    /// True while a detail or related lookup is in flight.
    pub loading: bool,
    /// Message of the last failed detail or related lookup.
    pub last_error: Option<String>,
}

/// Loads product listings. Failures are logged and yield empty results;
/// the pipeline has already notified the user.
#[derive(Debug, Clone)]
pub struct ProductStore {
    client: ApiClient,
    state: Arc<RwLock<ProductState>>,
}

impl ProductStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            state: Arc::new(RwLock::new(ProductState::default())),
        }
    }

    /// Returns a copy of the current state.
    pub async fn snapshot(&self) -> ProductState {
        self.state.read().await.clone()
    }

    /// Keyword search.
    pub async fn search(&self, keyword: &str) -> Vec<Product> {
        let found = or_empty("search products", self.client.products().search(keyword).await);
        self.state.write().await.search_results.clone_from(&found);
        found
    }

    /// Paged keyword search. A failed call yields an empty page for the
    /// requested position.
    pub async fn search_paged(&self, keyword: &str, page_num: u32, page_size: u32) -> PageResult<Product> {
        let page = match self.client.products().search_paged(keyword, page_num, page_size).await {
            Ok(page) => page,
            Err(err) => {
                error!(error = %err, "Failed to search products");
                PageResult::empty(page_num, page_size)
            }
        };
        self.state.write().await.search_results.clone_from(&page.list);
        page
    }

    /// Newest products.
    pub async fn load_new_products(&self) -> Vec<Product> {
        let found = or_empty("load new products", self.client.products().new_products().await);
        self.state.write().await.new_products.clone_from(&found);
        found
    }

    /// Best sellers.
    pub async fn load_hot_products(&self) -> Vec<Product> {
        let found = or_empty("load hot products", self.client.products().hot().await);
        self.state.write().await.hot_products.clone_from(&found);
        found
    }

    /// All series.
    pub async fn load_series(&self) -> Vec<Series> {
        let found = or_empty("load series", self.client.products().series().await);
        self.state.write().await.series.clone_from(&found);
        found
    }

    /// Featured series.
    pub async fn load_hot_series(&self) -> Vec<Series> {
        let found = or_empty("load hot series", self.client.products().hot_series().await);
        self.state.write().await.hot_series.clone_from(&found);
        found
    }

    /// One product; `None` when missing or failed, with the failure kept in
    /// `last_error`.
    pub async fn product_detail(&self, app_id: i64) -> Option<Product> {
        self.state.write().await.loading = true;
        let result = self.client.products().detail(app_id).await;
        self.finish(result).await.flatten()
    }

    /// Related products; empty when failed, with the failure kept in
    /// `last_error`.
    pub async fn related_products(&self, app_id: i64) -> Vec<Product> {
        self.state.write().await.loading = true;
        let result = self.client.products().related(app_id).await;
        self.finish(result).await.unwrap_or_default()
    }

    async fn finish<T>(&self, result: Result<T, ApiError>) -> Option<T> {
        let mut state = self.state.write().await;
        state.loading = false;
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                state.last_error = Some(err.to_string());
                None
            }
        }
    }
}

fn or_empty<T>(what: &str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|err| {
        error!(error = %err, "Failed to {what}");
        Vec::new()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::ports::TransportError;
    use crate::test_support::Harness;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn test_failed_listing_is_empty() {
        let h = Harness::new();
        h.transport
            .push(Err(TransportError::ConnectionFailed("refused".to_string())));
        let store = ProductStore::new(h.client.clone());
        assert!(store.load_hot_products().await.is_empty());
        assert_eq!(h.notifier.notices().len(), 1);
    }

    #[tokio::test]
    async fn test_series_cached_with_images() {
        let h = Harness::new();
        h.transport
            .push_data(json!([{"id": 1, "name": "Sport", "banner": {"url": "b.png"}}]));
        let store = ProductStore::new(h.client.clone());
        store.load_hot_series().await;
        let state = store.snapshot().await;
        assert_eq!(state.hot_series[0].image.as_deref(), Some("b.png"));
        assert_eq!(h.transport.last_request().path, "/public/categories/hot");
    }

    #[tokio::test]
    async fn test_failed_paged_search_keeps_position() {
        let h = Harness::new();
        h.transport.push_envelope(json!({"code": -1, "msg": "System error"}));
        let store = ProductStore::new(h.client.clone());
        let page = store.search_paged("dial", 3, 12).await;
        assert_eq!(page, PageResult::empty(3, 12));
        assert!(store.snapshot().await.search_results.is_empty());
    }

    #[tokio::test]
    async fn test_detail_failure_recorded() {
        let h = Harness::new();
        h.transport.push_envelope(json!({"code": 404, "msg": "Resource not found"}));
        let store = ProductStore::new(h.client.clone());
        assert!(store.product_detail(5).await.is_none());
        let state = store.snapshot().await;
        assert!(!state.loading);
        assert!(state.last_error.is_some());
    }
}
