//! Integration tests for record registration by the upload collaborator.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_then_resolve_round_trip() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/files/register",
            Some(json!({
                "storageKey": "uploads/2026/08/demo",
                "name": "demo.mp4",
                "type": "video/mp4",
                "size": 1048576,
                "hasExpiry": false,
                "isPassword": false
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let short_code = response.body["shortCode"].as_str().expect("shortCode");
    assert_eq!(short_code.len(), 8);

    let resolved = app
        .request(
            "GET",
            &format!("/api/files/resolveShareLink/{short_code}"),
            None,
        )
        .await;

    assert_eq!(resolved.status, StatusCode::OK);
    assert_eq!(resolved.body["name"], "demo.mp4");
    assert_eq!(resolved.body["fileId"], response.body["fileId"]);
    assert_eq!(resolved.body["status"], "active");
}

#[tokio::test]
async fn test_register_with_password_and_expiry() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/files/register",
            Some(json!({
                "storageKey": "uploads/2026/08/secret",
                "name": "secret.zip",
                "type": "application/zip",
                "size": 4096,
                "hasExpiry": true,
                "expiresAt": 48,
                "isPassword": true,
                "password": "letmein"
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["isPasswordProtected"], true);
    assert!(response.body.get("expiresAt").expect("expiresAt").is_string());

    // The freshly registered link honors its password gate end to end.
    let file_id = response.body["fileId"].as_str().expect("fileId");
    let denied = app
        .request("POST", &format!("/api/files/download/{file_id}"), None)
        .await;
    assert_eq!(denied.status, StatusCode::UNAUTHORIZED);

    let granted = app
        .request(
            "POST",
            &format!("/api/files/download/{file_id}"),
            Some(json!({ "password": "letmein" })),
        )
        .await;
    assert_eq!(granted.status, StatusCode::OK);
}

#[tokio::test]
async fn test_register_requires_expiry_hours_when_flagged() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/files/register",
            Some(json!({
                "storageKey": "uploads/2026/08/x",
                "name": "x.txt",
                "type": "text/plain",
                "size": 1,
                "hasExpiry": true,
                "isPassword": false
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_rejects_blank_name() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/files/register",
            Some(json!({
                "storageKey": "uploads/2026/08/y",
                "name": "",
                "type": "text/plain",
                "size": 1,
                "hasExpiry": false,
                "isPassword": false
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
