//! Shared helpers for driving the router in tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use staylist_server::{AppState, JwtKeys, MemoryMarketStore, create_router};
use std::sync::Arc;
use tower::ServiceExt;

/// Page size the suite runs with.
pub const PAGE_SIZE: i64 = 3;

/// Build the full application over a fresh in-memory store.
pub fn app() -> Router {
    let store = Arc::new(MemoryMarketStore::new());
    let state = AppState::new(store, JwtKeys::new("test-secret"), PAGE_SIZE);
    create_router(state)
}

/// Fire one request and collect status plus parsed JSON body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request build"),
        None => builder.body(Body::empty()).expect("request build"),
    };

    let response = app.clone().oneshot(request).await.expect("router call");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body read");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

/// Sign a user up and log them in, returning a bearer token.
pub async fn obtain_token(app: &Router, username: &str) -> String {
    let (status, _) = request(
        app,
        "POST",
        "/api/v1/users",
        None,
        Some(json!({
            "username": username,
            "email": format!("{username}@example.com"),
            "password": "sup3r-secret",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "sign-up for {username}");

    let (status, body) = request(
        app,
        "POST",
        "/api/v1/users/log-in",
        None,
        Some(json!({ "username": username, "password": "sup3r-secret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "log-in for {username}");
    body["token"].as_str().expect("token field").to_string()
}

/// Create a category of the given kind and return its id.
pub async fn create_category(app: &Router, token: &str, name: &str, kind: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/api/v1/categories",
        Some(token),
        Some(json!({ "name": name, "kind": kind })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "category {name}");
    body["id"].as_i64().expect("category id")
}

/// Create an amenity and return its id.
pub async fn create_amenity(app: &Router, name: &str) -> i64 {
    let (status, body) = request(
        app,
        "POST",
        "/api/v1/rooms/amenities",
        None,
        Some(json!({ "name": name, "description": "fast" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "amenity {name}");
    body["id"].as_i64().expect("amenity id")
}

/// A complete valid room payload bound to the given category and amenities.
pub fn room_payload(category: i64, amenities: &[i64]) -> Value {
    json!({
        "name": "Seaside loft",
        "country": "Portugal",
        "city": "Lisbon",
        "price": 120,
        "rooms": 2,
        "toilets": 1,
        "description": "Bright loft two blocks from the water.",
        "address": "12 Rua das Flores",
        "pet_friendly": true,
        "kind": "entire_place",
        "category": category,
        "amenities": amenities,
    })
}

/// Create a room and return its detail body.
pub async fn create_room(app: &Router, token: &str, category: i64, amenities: &[i64]) -> Value {
    let (status, body) = request(
        app,
        "POST",
        "/api/v1/rooms",
        Some(token),
        Some(room_payload(category, amenities)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "room create: {body}");
    body
}
