//! Sign-up, log-in, and profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{obtain_token, request};
use serde_json::json;

#[tokio::test]
async fn sign_up_log_in_and_read_own_profile() {
    let app = common::app();
    let token = obtain_token(&app, "ada").await;

    let (status, me) = request(&app, "GET", "/api/v1/users/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["username"], "ada");
}

#[tokio::test]
async fn usernames_are_unique() {
    let app = common::app();
    let _ = obtain_token(&app, "ada").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/users",
        None,
        Some(json!({
            "username": "ada",
            "email": "ada2@example.com",
            "password": "sup3r-secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["username"][0], "A user with that username already exists.");
}

#[tokio::test]
async fn wrong_credentials_are_rejected() {
    let app = common::app();
    let _ = obtain_token(&app, "ada").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/users/log-in",
        None,
        Some(json!({ "username": "ada", "password": "not-the-password" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Wrong username or password.");

    let (status, _) = request(
        &app,
        "POST",
        "/api/v1/users/log-in",
        None,
        Some(json!({ "username": "nobody", "password": "whatever1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn protected_endpoints_demand_credentials() {
    let app = common::app();

    let (status, body) = request(&app, "GET", "/api/v1/users/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Authentication credentials were not provided.");

    let (status, _) = request(&app, "GET", "/api/v1/users/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_check_is_open() {
    let app = common::app();
    let (status, body) = request(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
