//! Blog endpoints.

use wristo_domain::catalog::{BlogList, BlogPost, BlogTocItem, BlogTocQuery};
use wristo_domain::{ApiRequest, encode_segment};

use crate::error::ApiResult;

/// Filters for [`BlogApi::list`]. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogListQuery {
    /// Translation language, e.g. `en`.
    pub lang: Option<String>,
    /// 1-based page.
    pub page: Option<u32>,
    /// Page size.
    pub page_size: Option<u32>,
}

api_view!(
    /// Blog posts and the table of contents.
    BlogApi
);

impl BlogApi<'_> {
    /// Post by slug, optionally in `lang`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn by_slug(&self, slug: &str, lang: Option<&str>) -> ApiResult<Option<BlogPost>> {
        let request = ApiRequest::get(format!("/public/blog/get-by-slug/{}?populate=*", encode_segment(slug)))
            .query_opt("lang", lang.filter(|l| !l.is_empty()));
        self.client.send_optional(request).await
    }

    /// Post by translated slug.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn by_lang_slug(&self, lang: &str, slug: &str) -> ApiResult<Option<BlogPost>> {
        self.client
            .send_optional(ApiRequest::get(format!(
                "/public/blog/get-by-lang-slug/{}/{}?populate=*",
                encode_segment(lang),
                encode_segment(slug)
            )))
            .await
    }

    /// Post by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn detail(&self, post_id: i64) -> ApiResult<Option<BlogPost>> {
        self.client
            .send_optional(ApiRequest::get(format!("/public/blog/detail/{post_id}?populate=*")))
            .await
    }

    /// Post listing; the backend answers either a page or a plain list.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn list(&self, query: &BlogListQuery) -> ApiResult<BlogList> {
        let request = ApiRequest::get("/public/blog/list")
            .query_opt("lang", query.lang.as_deref().filter(|l| !l.is_empty()))
            .query_opt("page", query.page)
            .query_opt("pageSize", query.page_size);
        let list = self.client.send_optional::<BlogList>(request).await?;
        Ok(list.unwrap_or_else(|| BlogList::Plain(Vec::new())))
    }

    /// Table-of-contents tree below `query.parent_id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the call fails.
    pub async fn toc_tree(&self, query: &BlogTocQuery, lang: Option<&str>) -> ApiResult<Vec<BlogTocItem>> {
        let request = ApiRequest::post("/public/blog/toc/tree?populate=translations")
            .json(query)?
            .query_opt("lang", lang.filter(|l| !l.is_empty()));
        self.client.send_list(request).await
    }
}
