//! Integration tests for the request-validation envelopes.

mod common;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_field_errors() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({
                "first_name": "A",
                "last_name": "B",
                "email": "not-an-email",
                "password": "short",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body.get("status").unwrap(), "error");

    let errors = response.body.get("errors").expect("errors map");
    assert_eq!(
        errors.get("email").unwrap()[0],
        "Email must be a valid email address"
    );
    assert_eq!(
        errors.get("password").unwrap()[0],
        "Password must be at least 6 characters long"
    );
    assert_eq!(
        errors.get("first_name").unwrap()[0],
        "First name must be at least 2 characters long"
    );
}

#[tokio::test]
async fn test_register_missing_field_is_bad_request() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/register",
            Some(json!({ "first_name": "Ada" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert!(response.message().starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_login_field_errors() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/login",
            Some(json!({ "email": "nope", "password": "abc" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = response.body.get("errors").expect("errors map");
    assert!(errors.get("email").is_some());
    assert_eq!(
        errors.get("password").unwrap()[0],
        "Password must be at least 4 characters long"
    );
}

#[tokio::test]
async fn test_refresh_requires_token_field() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/auth/refresh",
            Some(json!({ "refresh_token": "" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = response.body.get("errors").expect("errors map");
    assert_eq!(errors.get("refresh_token").unwrap()[0], "Refresh token is required");
}

#[tokio::test]
async fn test_booking_requires_authentication() {
    let app = common::TestApp::new();

    let response = app
        .request(
            "POST",
            "/booking",
            Some(json!({
                "name": "Standup",
                "meeting_room_id": "00000000-0000-0000-0000-000000000001",
                "start_time": "2026-08-04T09:00:00Z",
                "end_time": "2026-08-04T09:30:00Z",
                "purpose": "Daily sync",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = common::TestApp::new();

    let response = app.request("GET", "/nope", None, None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
