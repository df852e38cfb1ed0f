//! Website content endpoints.

use wristo_domain::ApiRequest;
use wristo_domain::catalog::HomeBanner;

use crate::error::ApiResult;

api_view!(
    /// Home page content.
    WebsiteApi
);

impl WebsiteApi<'_> {
    /// Banners currently shown on the home page.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn home_banners(&self) -> ApiResult<Vec<HomeBanner>> {
        self.client
            .send_list(ApiRequest::get("/public/website/home-banners/active"))
            .await
    }
}
