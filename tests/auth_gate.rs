//! Integration tests for the authentication gate's ordered rejections.
//!
//! Every case here must reject before any repository access, so the
//! tests run against the unreachable-database test app.

mod common;

use chrono::Utc;
use http::StatusCode;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TokenClaims {
    user_id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    iat: i64,
    exp: i64,
}

fn signed_access_token(secret: &str) -> String {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        user_id: Uuid::new_v4(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: "test@example.com".to_string(),
        iat: now,
        exp: now + 900,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign token")
}

#[tokio::test]
async fn test_missing_header_is_rejected() {
    let app = common::TestApp::new();

    let response = app.request("GET", "/meeting-room", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        "Authorization header must be in format: Bearer <token>"
    );
    assert_eq!(response.body.get("status").unwrap(), "error");
}

#[tokio::test]
async fn test_non_bearer_header_is_rejected() {
    let app = common::TestApp::new();

    let response = app
        .request_with_auth_header("/meeting-room", "Basic dXNlcjpwYXNz")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.message(),
        "Authorization header must be in format: Bearer <token>"
    );
}

#[tokio::test]
async fn test_empty_token_is_missing_not_invalid() {
    let app = common::TestApp::new();

    let response = app
        .request_with_auth_header("/meeting-room", "Bearer ")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Token is missing");
}

#[tokio::test]
async fn test_garbage_token_is_invalid() {
    let app = common::TestApp::new();

    let response = app
        .request("GET", "/meeting-room", None, Some("not.a.jwt"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid token");
}

#[tokio::test]
async fn test_wrong_secret_token_is_invalid() {
    let app = common::TestApp::new();
    let token = signed_access_token("some-other-secret");

    let response = app.request("GET", "/meeting-room", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid token");
}

#[tokio::test]
async fn test_store_fault_is_internal_not_unauthorized() {
    // A correctly signed token passes verification; the identity lookup
    // then hits the unreachable database. That is a 500-class fault and
    // must be told apart from an authentication rejection.
    let app = common::TestApp::new();
    let token = signed_access_token(common::ACCESS_SECRET);

    let response = app.request("GET", "/meeting-room", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.message(), "Internal server error");
}

#[tokio::test]
async fn test_refresh_with_garbage_token_is_rejected() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "refresh_token": "not.a.jwt" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid or expired refresh token");
}

#[tokio::test]
async fn test_refresh_with_wrong_class_token_is_rejected() {
    // An access token presented to the refresh endpoint must fail: the
    // two token classes are signed with independent secrets.
    let app = common::TestApp::new();
    let token = signed_access_token(common::ACCESS_SECRET);

    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(serde_json::json!({ "refresh_token": token })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.message(), "Invalid or expired refresh token");
}
