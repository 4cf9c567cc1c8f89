//! Integration tests for share link resolution.

use chrono::{Duration, Utc};
use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_resolve_unknown_code_returns_404() {
    let app = TestApp::new();

    let response = app
        .request("GET", "/api/files/resolveShareLink/nocode00", None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_resolve_returns_public_metadata() {
    let app = TestApp::new();
    let file = app.seed_file("goodlink", None, None).await;

    let response = app
        .request("GET", "/api/files/resolveShareLink/goodlink", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["fileId"], file.id.to_string());
    assert_eq!(response.body["name"], "goodlink.pdf");
    assert_eq!(response.body["type"], "application/pdf");
    assert_eq!(response.body["size"], 2048);
    assert_eq!(response.body["isPasswordProtected"], false);
    assert_eq!(response.body["status"], "active");
    assert!(response.body.get("createdAt").is_some());
}

#[tokio::test]
async fn test_resolve_never_leaks_secrets() {
    let app = TestApp::new();
    app.seed_file("guarded1", Some("s3cret"), None).await;

    let response = app
        .request("GET", "/api/files/resolveShareLink/guarded1", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["isPasswordProtected"], true);
    assert!(response.body.get("passwordHash").is_none());
    assert!(response.body.get("password_hash").is_none());
    assert!(response.body.get("storageKey").is_none());
    assert!(response.body.get("storage_key").is_none());
}

#[tokio::test]
async fn test_resolve_expired_link_reports_expired_status() {
    let app = TestApp::new();
    let past = Utc::now() - Duration::hours(2);
    app.seed_file("outdated", None, Some(past)).await;

    let response = app
        .request("GET", "/api/files/resolveShareLink/outdated", None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "expired");
}
