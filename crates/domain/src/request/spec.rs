//! API request specification

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Headers, HttpMethod, QueryParams, RequestBody};
use crate::error::{DomainError, DomainResult};

/// Path fragment that marks an endpoint as not requiring a session.
pub const PUBLIC_PATH_MARKER: &str = "/public/";

/// One call against the storefront backend.
///
/// `path` is relative to the configured base URL and may carry an inline
/// query string (`/public/blog/detail/3?populate=*`); `query` holds the
/// parameters appended on top of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiRequest {
    /// Correlation id for logs.
    pub id: Uuid,
    /// HTTP method
    pub method: HttpMethod,
    /// Path relative to the API base URL
    pub path: String,
    /// Extra query parameters
    #[serde(default)]
    pub query: QueryParams,
    /// Request headers
    #[serde(default)]
    pub headers: Headers,
    /// Request body
    #[serde(default)]
    pub body: RequestBody,
}

impl ApiRequest {
    /// Creates a request with the given method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            method,
            path: path.into(),
            query: QueryParams::new(),
            headers: Headers::new(),
            body: RequestBody::Empty,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push(key, value.to_string());
        self
    }

    /// Appends a query parameter only when `value` is present.
    #[must_use]
    pub fn query_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(v) => self.query(key, v),
            None => self,
        }
    }

    /// Sets a JSON body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` cannot be represented as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> DomainResult<Self> {
        let value =
            serde_json::to_value(body).map_err(|e| DomainError::InvalidBody(e.to_string()))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Sets a multipart body.
    #[must_use]
    pub fn multipart(mut self, parts: Vec<super::FormPart>) -> Self {
        self.body = RequestBody::Multipart(parts);
        self
    }

    /// Returns the path without its inline query string.
    #[must_use]
    pub fn path_only(&self) -> &str {
        self.path
            .split_once('?')
            .map_or(self.path.as_str(), |(path, _)| path)
    }

    /// Returns the inline query string, without the `?`.
    #[must_use]
    pub fn inline_query(&self) -> Option<&str> {
        self.path
            .split_once('?')
            .map(|(_, query)| query)
            .filter(|q| !q.is_empty())
    }

    /// Returns true if `key` is set either inline or in `query`.
    #[must_use]
    pub fn has_query_key(&self, key: &str) -> bool {
        self.query.contains_key(key)
            || self.inline_query().is_some_and(|q| {
                q.split('&')
                    .any(|pair| pair.split_once('=').map_or(pair, |(k, _)| k) == key)
            })
    }

    /// Returns true if the target is a public endpoint.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.path.contains(PUBLIC_PATH_MARKER)
    }

    /// Checks that the path is relative to the API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the path does not start with `/`.
    pub fn validate(&self) -> DomainResult<()> {
        if self.path.starts_with('/') {
            Ok(())
        } else {
            Err(DomainError::InvalidPath(self.path.clone()))
        }
    }
}

/// Percent-encodes a single path segment.
#[must_use]
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_inline_query_split() {
        let req = ApiRequest::get("/public/blog/detail/3?populate=*");
        assert_eq!(req.path_only(), "/public/blog/detail/3");
        assert_eq!(req.inline_query(), Some("populate=*"));
        assert!(req.has_query_key("populate"));
        assert!(!req.has_query_key("device"));
    }

    #[test]
    fn test_query_key_from_params() {
        let req = ApiRequest::get("/public/products/hot").query("device", 7);
        assert!(req.has_query_key("device"));
        assert_eq!(req.query.get("device"), Some("7"));
    }

    #[test]
    fn test_query_opt_skips_none() {
        let req = ApiRequest::get("/public/merchants/top").query_opt::<u32>("limit", None);
        assert!(req.query.is_empty());
    }

    #[test]
    fn test_public_detection() {
        assert!(ApiRequest::get("/public/products/hot").is_public());
        assert!(!ApiRequest::get("/users/info").is_public());
    }

    #[test]
    fn test_validate_rejects_relative_path() {
        assert!(ApiRequest::get("users/info").validate().is_err());
        assert!(ApiRequest::get("/users/info").validate().is_ok());
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("hello world/x"), "hello%20world%2Fx");
    }

    #[test]
    fn test_json_body() {
        let req = ApiRequest::post("/public/purchase/callback")
            .json(&serde_json::json!({"transaction_id": "txn_1"}))
            .unwrap();
        assert_eq!(req.body.content_type(), Some("application/json"));
    }
}
