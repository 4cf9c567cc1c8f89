//! Integration tests for share link password verification.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_verify_correct_password() {
    let app = TestApp::new();
    app.seed_file("locked00", Some("open sesame"), None).await;

    let response = app
        .request(
            "POST",
            "/api/files/verifyFilePassword",
            Some(json!({ "shortCode": "locked00", "password": "open sesame" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_verify_wrong_password_is_401() {
    let app = TestApp::new();
    app.seed_file("locked01", Some("open sesame"), None).await;

    let response = app
        .request(
            "POST",
            "/api/files/verifyFilePassword",
            Some(json!({ "shortCode": "locked01", "password": "close sesame" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_verify_unprotected_link_accepts_anything() {
    let app = TestApp::new();
    app.seed_file("nolock01", None, None).await;

    let response = app
        .request(
            "POST",
            "/api/files/verifyFilePassword",
            Some(json!({ "shortCode": "nolock01", "password": "whatever" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_verify_unknown_code_is_404() {
    let app = TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/files/verifyFilePassword",
            Some(json!({ "shortCode": "nocode01", "password": "pw" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_verify_empty_password_is_rejected() {
    let app = TestApp::new();
    app.seed_file("locked02", Some("pw"), None).await;

    let response = app
        .request(
            "POST",
            "/api/files/verifyFilePassword",
            Some(json!({ "shortCode": "locked02", "password": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}
