//! Transport tests against a mock backend.
#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wristo_application::ports::{HttpTransport, TransportError};
use wristo_domain::{ApiRequest, ClientSettings, FormPart};
use wristo_infrastructure::ReqwestTransport;

fn transport(server: &MockServer) -> ReqwestTransport {
    let settings = ClientSettings::for_base_url(&format!("{}/api", server.uri())).unwrap();
    ReqwestTransport::new(settings).unwrap()
}

#[tokio::test]
async fn get_resolves_path_and_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/blog/detail/3"))
        .and(query_param("populate", "*"))
        .and(query_param("lang", "en"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": {"id": 3}})))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = ApiRequest::get("/public/blog/detail/3?populate=*").query("lang", "en");
    request.headers.set("Authorization", "Bearer tok");
    let response = transport(&server).send(&request).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.header("content-type"), Some("application/json"));
    let body: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
    assert_eq!(body["data"]["id"], 3);
}

#[tokio::test]
async fn bodiless_get_defaults_to_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/products/hot"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0, "data": []})))
        .expect(1)
        .mount(&server)
        .await;

    let response = transport(&server)
        .send(&ApiRequest::get("/public/products/hot"))
        .await
        .unwrap();
    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/trials/v1/purchase"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"code": "ABC"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post("/trials/v1/purchase")
        .json(&json!({"code": "ABC"}))
        .unwrap();
    let response = transport(&server).send(&request).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn multipart_upload_carries_file_part() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/files/upload/avatar"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 0})))
        .mount(&server)
        .await;

    let request = ApiRequest::post("/files/upload/avatar")
        .multipart(vec![FormPart::file("file", "me.png", b"png-bytes".to_vec())]);
    transport(&server).send(&request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    let content_type = received[0]
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("multipart/form-data; boundary="));
    assert_eq!(received[0].headers.get_all("content-type").iter().count(), 1);
    let body = String::from_utf8_lossy(&received[0].body).to_lowercase();
    assert!(body.contains("name=\"file\"; filename=\"me.png\""));
    assert!(body.contains("content-type: image/png"));
    assert!(body.contains("png-bytes"));
}

#[tokio::test]
async fn error_status_is_a_response_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/users/info"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let response = transport(&server)
        .send(&ApiRequest::get("/users/info"))
        .await
        .unwrap();
    assert_eq!(response.status, 403);
    assert!(response.is_auth_failure());
}

#[tokio::test]
async fn slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let mut settings = ClientSettings::for_base_url(&server.uri()).unwrap();
    settings.timeout = Duration::from_millis(50);
    let err = ReqwestTransport::new(settings)
        .unwrap()
        .send(&ApiRequest::get("/public/products/hot"))
        .await
        .unwrap_err();
    assert_eq!(err, TransportError::Timeout { timeout_ms: 50 });
}

#[tokio::test]
async fn unreachable_backend_is_connection_failure() {
    let settings = ClientSettings::for_base_url("http://127.0.0.1:9/api").unwrap();
    let err = ReqwestTransport::new(settings)
        .unwrap()
        .send(&ApiRequest::get("/public/products/hot"))
        .await
        .unwrap_err();
    assert!(matches!(err, TransportError::ConnectionFailed(_)));
}
