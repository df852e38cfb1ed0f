//! Product catalog endpoints.

use wristo_domain::catalog::{PageResult, Product, Series};
use wristo_domain::{ApiRequest, encode_segment};

use crate::error::ApiResult;

api_view!(
    /// Product search, listings and series.
    ProductsApi
);

impl ProductsApi<'_> {
    /// Keyword search on the legacy, non-public endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn search(&self, keyword: &str) -> ApiResult<Vec<Product>> {
        self.client
            .send_list(ApiRequest::get("/products/search").query("keyword", keyword))
            .await
    }

    /// Paged keyword search. Page fields missing from the response default
    /// to the requested ones.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn search_paged(&self, keyword: &str, page_num: u32, page_size: u32) -> ApiResult<PageResult<Product>> {
        let request = ApiRequest::get("/public/products/search")
            .query("keyword", keyword)
            .query("pageNum", page_num)
            .query("pageSize", page_size);
        let page = self.client.send_optional::<PageResult<Product>>(request).await?;
        Ok(page.map_or_else(
            || PageResult::empty(page_num, page_size),
            |page| page.or_requested(page_num, page_size),
        ))
    }

    /// Newest products.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn new_products(&self) -> ApiResult<Vec<Product>> {
        self.client.send_list(ApiRequest::get("/public/products/new")).await
    }

    /// Best sellers.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn hot(&self) -> ApiResult<Vec<Product>> {
        self.client.send_list(ApiRequest::get("/public/products/hot")).await
    }

    /// One product by app id.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn detail(&self, app_id: i64) -> ApiResult<Option<Product>> {
        self.client
            .send_optional(ApiRequest::get(format!("/public/products/{app_id}")))
            .await
    }

    /// Products related to `app_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn related(&self, app_id: i64) -> ApiResult<Vec<Product>> {
        self.client
            .send_list(ApiRequest::get(format!("/public/products/{app_id}/related")))
            .await
    }

    /// All series, images resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn series(&self) -> ApiResult<Vec<Series>> {
        self.series_at("/public/categories").await
    }

    /// Featured series, images resolved.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn hot_series(&self) -> ApiResult<Vec<Series>> {
        self.series_at("/public/categories/hot").await
    }

    /// Series by slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn series_by_slug(&self, slug: &str) -> ApiResult<Option<Series>> {
        let series = self
            .client
            .send_optional::<Series>(ApiRequest::get(format!("/public/categories/{}", encode_segment(slug))))
            .await?;
        Ok(series.map(Series::with_resolved_image))
    }

    async fn series_at(&self, path: &str) -> ApiResult<Vec<Series>> {
        let series = self.client.send_list::<Series>(ApiRequest::get(path)).await?;
        Ok(series.into_iter().map(Series::with_resolved_image).collect())
    }
}
