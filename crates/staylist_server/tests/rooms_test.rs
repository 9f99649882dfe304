//! Room creation, authorization, and the all-or-nothing amenity attach.

mod common;

use axum::http::StatusCode;
use common::{create_amenity, create_category, create_room, obtain_token, request, room_payload};
use serde_json::json;

#[tokio::test]
async fn created_room_carries_exactly_the_requested_amenities() {
    let app = common::app();
    let token = obtain_token(&app, "host").await;
    let category = create_category(&app, &token, "Tiny homes", "rooms").await;
    let wifi = create_amenity(&app, "WiFi").await;
    let kitchen = create_amenity(&app, "Kitchen").await;

    let room = create_room(&app, &token, category, &[wifi, kitchen]).await;
    let amenities = room["amenities"].as_array().unwrap();
    assert_eq!(amenities.len(), 2);
    assert_eq!(amenities[0]["name"], "WiFi");
    assert_eq!(amenities[1]["name"], "Kitchen");
    assert_eq!(room["category"]["name"], "Tiny homes");
    assert_eq!(room["owner"]["username"], "host");

    let (status, listed) = request(&app, "GET", "/api/v1/rooms", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn invalid_amenity_rolls_back_the_whole_room() {
    let app = common::app();
    let token = obtain_token(&app, "host").await;
    let category = create_category(&app, &token, "Tiny homes", "rooms").await;
    let wifi = create_amenity(&app, "WiFi").await;

    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/rooms",
        Some(&token),
        Some(room_payload(category, &[wifi, 9999])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Amenity 9999 not found.");

    // No room row survived the failed unit of work.
    let (_, listed) = request(&app, "GET", "/api/v1/rooms", None, None).await;
    assert!(listed.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn category_rules_gate_room_creation() {
    let app = common::app();
    let token = obtain_token(&app, "host").await;
    let experiences = create_category(&app, &token, "Workshops", "experiences").await;

    let mut payload = room_payload(1, &[]);
    payload["category"] = serde_json::Value::Null;
    let (status, body) = request(&app, "POST", "/api/v1/rooms", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Category is required.");

    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/rooms",
        Some(&token),
        Some(room_payload(9999, &[])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "Category not found.");

    let (status, body) = request(
        &app,
        "POST",
        "/api/v1/rooms",
        Some(&token),
        Some(room_payload(experiences, &[])),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["detail"], "The category kind should be 'rooms'.");
}

#[tokio::test]
async fn room_creation_requires_authentication_and_valid_fields() {
    let app = common::app();
    let token = obtain_token(&app, "host").await;
    let category = create_category(&app, &token, "Tiny homes", "rooms").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/v1/rooms",
        None,
        Some(room_payload(category, &[])),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let mut payload = room_payload(category, &[]);
    payload["name"] = serde_json::Value::Null;
    payload["price"] = json!(-10);
    let (status, body) = request(&app, "POST", "/api/v1/rooms", Some(&token), Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["name"][0], "This field is required.");
    assert_eq!(
        body["price"][0],
        "Ensure this value is greater than or equal to 0."
    );
}

#[tokio::test]
async fn only_the_owner_may_mutate_a_room() {
    let app = common::app();
    let owner = obtain_token(&app, "host").await;
    let intruder = obtain_token(&app, "intruder").await;
    let category = create_category(&app, &owner, "Tiny homes", "rooms").await;
    let room = create_room(&app, &owner, category, &[]).await;
    let room_id = room["id"].as_i64().unwrap();
    let uri = format!("/api/v1/rooms/{room_id}");

    let (status, _) = request(
        &app,
        "PUT",
        &uri,
        Some(&intruder),
        Some(json!({ "name": "Hijacked" })),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = request(&app, "DELETE", &uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // The resource is unchanged.
    let (status, detail) = request(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["name"], "Seaside loft");

    // The owner still can.
    let (status, updated) = request(
        &app,
        "PUT",
        &uri,
        Some(&owner),
        Some(json!({ "price": 99 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], 99);
    assert_eq!(updated["name"], "Seaside loft");

    let (status, _) = request(&app, "DELETE", &uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = request(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn room_detail_reports_ownership_to_the_caller() {
    let app = common::app();
    let owner = obtain_token(&app, "host").await;
    let category = create_category(&app, &owner, "Tiny homes", "rooms").await;
    let room = create_room(&app, &owner, category, &[]).await;
    let uri = format!("/api/v1/rooms/{}", room["id"].as_i64().unwrap());

    let (_, detail) = request(&app, "GET", &uri, Some(&owner), None).await;
    assert_eq!(detail["is_owner"], true);

    let (_, detail) = request(&app, "GET", &uri, None, None).await;
    assert_eq!(detail["is_owner"], false);
}

#[tokio::test]
async fn photos_are_owner_gated() {
    let app = common::app();
    let owner = obtain_token(&app, "host").await;
    let intruder = obtain_token(&app, "intruder").await;
    let category = create_category(&app, &owner, "Tiny homes", "rooms").await;
    let room = create_room(&app, &owner, category, &[]).await;
    let uri = format!("/api/v1/rooms/{}/photos", room["id"].as_i64().unwrap());
    let payload = json!({ "file": "https://img.example.com/1.jpg", "description": "facade" });

    let (status, _) = request(&app, "POST", &uri, Some(&intruder), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, photo) = request(&app, "POST", &uri, Some(&owner), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    let photo_id = photo["id"].as_i64().unwrap();
    let photo_uri = format!("/api/v1/medias/photos/{photo_id}");

    let (status, _) = request(&app, "DELETE", &photo_uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = request(&app, "DELETE", &photo_uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(&app, "DELETE", &photo_uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn room_amenities_paginate_like_reviews() {
    let app = common::app();
    let token = obtain_token(&app, "host").await;
    let category = create_category(&app, &token, "Tiny homes", "rooms").await;
    let mut amenity_ids = Vec::new();
    for name in ["WiFi", "Kitchen", "Heating", "Washer", "Parking"] {
        amenity_ids.push(create_amenity(&app, name).await);
    }
    let room = create_room(&app, &token, category, &amenity_ids).await;
    let uri = format!("/api/v1/rooms/{}/amenities", room["id"].as_i64().unwrap());

    let (status, page) = request(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.as_array().unwrap().len(), 3);

    let (_, page) = request(&app, "GET", &format!("{uri}?page=2"), None, None).await;
    assert_eq!(page.as_array().unwrap().len(), 2);

    let (status, page) = request(&app, "GET", &format!("{uri}?page=100"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn a_room_holds_at_most_one_video_and_it_is_owner_gated() {
    let app = common::app();
    let owner = obtain_token(&app, "host").await;
    let intruder = obtain_token(&app, "intruder").await;
    let category = create_category(&app, &owner, "Tiny homes", "rooms").await;
    let room = create_room(&app, &owner, category, &[]).await;
    let uri = format!("/api/v1/rooms/{}/video", room["id"].as_i64().unwrap());
    let payload = json!({ "file": "https://vid.example.com/tour.mp4" });

    let (status, _) = request(&app, "POST", &uri, Some(&intruder), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, video) = request(&app, "POST", &uri, Some(&owner), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(video["file"], "https://vid.example.com/tour.mp4");
    let video_id = video["id"].as_i64().unwrap();

    // The second attach is rejected while the first video exists.
    let (status, body) = request(&app, "POST", &uri, Some(&owner), Some(payload.clone())).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["room"][0], "This room already has a video.");

    let video_uri = format!("/api/v1/medias/videos/{video_id}");
    let (status, _) = request(&app, "DELETE", &video_uri, Some(&intruder), None).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = request(&app, "DELETE", &video_uri, Some(&owner), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Once cleared, a new video can go up.
    let (status, _) = request(&app, "POST", &uri, Some(&owner), Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
}
