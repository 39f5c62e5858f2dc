//! Ambient endpoint integration tests: banner, health, log ingest, CORS

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::json;

use crate::common::{request, TestApp, FRONTEND_URL};

#[tokio::test]
async fn test_root_banner() {
    let app = TestApp::new();

    let response = app.get("/", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), devlead_app::API_BANNER);

    let hello = app.get("/hello", None).await;
    assert_eq!(hello.text(), "Hello World!");
}

#[tokio::test]
async fn test_liveness_is_independent_of_database() {
    let app = TestApp::new();

    let response = app.get("/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["status"], "ok");
    assert!(response.json()["timestamp"].is_string());
}

#[tokio::test]
async fn test_readiness_reports_unreachable_database() {
    let app = TestApp::new();

    let response = app.get("/health/ready", None).await;

    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    let body = response.json();
    assert_eq!(body["status"], "unavailable");
    assert_eq!(body["database"], "unhealthy");
}

#[tokio::test]
async fn test_log_ingest_acknowledges() {
    let app = TestApp::new();

    let response = app
        .send(request(
            "POST",
            "/logs",
            None,
            Some(json!({ "level": "error", "message": "boom", "page": "/dashboard" })),
        ))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "success": true }));
}

#[tokio::test]
async fn test_cors_preflight_allows_frontend_with_credentials() {
    let app = TestApp::new();

    let preflight = Request::builder()
        .method("OPTIONS")
        .uri("/auth/profile")
        .header(header::ORIGIN, FRONTEND_URL)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
        .body(Body::empty())
        .unwrap();

    let response = app.send(preflight).await;

    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        FRONTEND_URL
    );
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );
}

#[tokio::test]
async fn test_cors_never_echoes_other_origins() {
    let app = TestApp::new();

    let request = Request::builder()
        .uri("/hello")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = app.send(request).await;

    // The allowed origin is fixed, so a browser on another origin is refused
    assert_eq!(
        response.headers[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        FRONTEND_URL
    );
}
