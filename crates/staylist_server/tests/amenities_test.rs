//! Amenity CRUD through the HTTP surface.

mod common;

use axum::http::StatusCode;
use common::request;
use serde_json::json;

#[tokio::test]
async fn amenity_lifecycle() {
    let app = common::app();

    // Create one amenity.
    let (status, created) = request(
        &app,
        "POST",
        "/api/v1/rooms/amenities",
        None,
        Some(json!({ "name": "WiFi", "description": "fast" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "WiFi");
    assert_eq!(created["description"], "fast");
    let id = created["id"].as_i64().unwrap();

    // The list holds exactly that one entry.
    let (status, listed) = request(&app, "GET", "/api/v1/rooms/amenities", None, None).await;
    assert_eq!(status, StatusCode::OK);
    let listed = listed.as_array().unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0]["name"], "WiFi");

    // Detail fetch.
    let (status, fetched) = request(
        &app,
        "GET",
        &format!("/api/v1/rooms/amenities/{id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["description"], "fast");

    // Partial update leaves the untouched field alone.
    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/v1/rooms/amenities/{id}"),
        None,
        Some(json!({ "name": "Fast WiFi" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "Fast WiFi");
    assert_eq!(updated["description"], "fast");

    // Delete, then the detail fetch is a 404.
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/v1/rooms/amenities/{id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = request(
        &app,
        "GET",
        &format!("/api/v1/rooms/amenities/{id}"),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Not found.");
}

#[tokio::test]
async fn amenity_creation_requires_a_name() {
    let app = common::app();

    let (status, body) = request(&app, "POST", "/api/v1/rooms/amenities", None, Some(json!({})))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["name"][0], "This field is required.");
}

#[tokio::test]
async fn missing_amenity_is_a_404() {
    let app = common::app();

    let (status, _) = request(&app, "GET", "/api/v1/rooms/amenities/2", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
