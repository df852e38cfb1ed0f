//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port. It resolves request
//! paths against the configured API root and reports whatever status the
//! backend answers with; only a missing response is an error.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Url};
use wristo_application::ports::{HttpTransport, TransportError};
use wristo_domain::{ApiRequest, ClientSettings, FormPart, HttpMethod, RequestBody, TransportResponse};

/// HTTP transport backed by `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    settings: ClientSettings,
}

impl ReqwestTransport {
    /// Creates a transport for `settings.base_url`.
    ///
    /// Default configuration:
    /// - Timeout: `settings.timeout` per request
    /// - Follow redirects: up to 10
    /// - User-Agent: "wristo/<version>"
    /// - Content-Type: `application/json` unless the body sets its own
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(settings: ClientSettings) -> Result<Self, TransportError> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .user_agent(concat!("wristo/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self { client, settings })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    /// Resolves the request path and appends the extra query parameters
    /// after any inline ones.
    fn build_url(&self, request: &ApiRequest) -> Result<Url, TransportError> {
        let mut url = self
            .settings
            .endpoint_url(&request.path)
            .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;

        if !request.query.is_empty() {
            let encoded = serde_urlencoded::to_string(request.query.pairs())
                .map_err(|e| TransportError::InvalidUrl(e.to_string()))?;
            let query = match url.query() {
                Some(existing) if !existing.is_empty() => format!("{existing}&{encoded}"),
                _ => encoded,
            };
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    /// Builds the request body from domain `RequestBody`.
    fn build_body(
        builder: reqwest::RequestBuilder,
        body: &RequestBody,
    ) -> Result<reqwest::RequestBuilder, TransportError> {
        match body {
            RequestBody::Empty => Ok(builder),
            RequestBody::Json(value) => Ok(builder.json(value)),
            RequestBody::Multipart(parts) => {
                let mut form = Form::new();
                for part in parts {
                    form = form.part(part.name.clone(), Self::build_part(part)?);
                }
                Ok(builder.multipart(form))
            }
        }
    }

    /// Builds one multipart part, guessing the MIME type from the file name
    /// when none is given.
    fn build_part(part: &FormPart) -> Result<Part, TransportError> {
        let content_type = part.content_type.clone().unwrap_or_else(|| {
            part.file_name
                .as_deref()
                .map_or(mime::APPLICATION_OCTET_STREAM, |name| {
                    mime_guess::from_path(name).first_or_octet_stream()
                })
                .essence_str()
                .to_string()
        });

        let mut built = Part::bytes(part.bytes.clone())
            .mime_str(&content_type)
            .map_err(|e| TransportError::InvalidBody(format!("{}: {e}", part.name)))?;
        if let Some(file_name) = &part.file_name {
            built = built.file_name(file_name.clone());
        }
        Ok(built)
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout { timeout_ms };
        }

        if error.is_connect() {
            return TransportError::ConnectionFailed(error.to_string());
        }

        if error.is_builder() {
            return TransportError::InvalidUrl(error.to_string());
        }

        TransportError::Other(error.to_string())
    }

    fn timeout_ms(&self) -> u64 {
        u64::try_from(self.settings.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: &ApiRequest) -> Result<TransportResponse, TransportError> {
        let url = self.build_url(request)?;
        let timeout_ms = self.timeout_ms();

        let start = Instant::now();

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(Duration::from_millis(timeout_ms));

        builder = Self::build_body(builder, &request.body)?;

        for (name, value) in request.headers.iter() {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?;

        let status = response.status().as_u16();

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
            .collect();

        let body = response
            .bytes()
            .await
            .map_err(|e| Self::map_error(&e, timeout_ms))?
            .to_vec();

        Ok(TransportResponse::new(status, headers, body, start.elapsed()))
    }
}
