//! Review creation and paginated listing.

mod common;

use axum::http::StatusCode;
use common::{create_category, create_room, obtain_token, request};
use serde_json::json;

async fn room_with_reviews(app: &axum::Router, count: usize) -> (String, i64) {
    let token = obtain_token(app, "host").await;
    let category = create_category(app, &token, "Tiny homes", "rooms").await;
    let room = create_room(app, &token, category, &[]).await;
    let room_id = room["id"].as_i64().unwrap();

    for n in 0..count {
        let (status, _) = request(
            app,
            "POST",
            &format!("/api/v1/rooms/{room_id}/reviews"),
            Some(&token),
            Some(json!({ "payload": format!("stay number {n}"), "rating": 4 })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }
    (token, room_id)
}

#[tokio::test]
async fn reviews_paginate_in_windows_of_three() {
    let app = common::app();
    let (_token, room_id) = room_with_reviews(&app, 5).await;
    let uri = format!("/api/v1/rooms/{room_id}/reviews");

    let (status, page) = request(&app, "GET", &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(page.as_array().unwrap().len(), 3);

    let (_, page) = request(&app, "GET", &format!("{uri}?page=2"), None, None).await;
    assert_eq!(page.as_array().unwrap().len(), 2);

    // Out-of-range pages are an empty sequence, not an error.
    let (status, page) = request(&app, "GET", &format!("{uri}?page=100"), None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_page_numbers_are_rejected() {
    let app = common::app();
    let (_token, room_id) = room_with_reviews(&app, 1).await;
    let uri = format!("/api/v1/rooms/{room_id}/reviews");

    let (status, body) = request(&app, "GET", &format!("{uri}?page=abc"), None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["page"][0], "A valid integer is required.");

    let (status, _) = request(&app, "GET", &format!("{uri}?page=0"), None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn review_rules() {
    let app = common::app();
    let token = obtain_token(&app, "host").await;
    let category = create_category(&app, &token, "Tiny homes", "rooms").await;
    let room = create_room(&app, &token, category, &[]).await;
    let uri = format!("/api/v1/rooms/{}/reviews", room["id"].as_i64().unwrap());

    // Authentication is required to write.
    let (status, _) = request(
        &app,
        "POST",
        &uri,
        None,
        Some(json!({ "payload": "nice", "rating": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Ratings live in 1..=5.
    let (status, body) = request(
        &app,
        "POST",
        &uri,
        Some(&token),
        Some(json!({ "payload": "nice", "rating": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["rating"][0], "Ensure this value is less than or equal to 5.");

    // Reviews on a missing room are a 404.
    let (status, _) = request(
        &app,
        "GET",
        "/api/v1/rooms/9999/reviews",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn room_rating_is_the_review_mean() {
    let app = common::app();
    let token = obtain_token(&app, "host").await;
    let category = create_category(&app, &token, "Tiny homes", "rooms").await;
    let room = create_room(&app, &token, category, &[]).await;
    let room_id = room["id"].as_i64().unwrap();
    assert_eq!(room["rating"], 0.0);

    for rating in [5, 4, 4] {
        let (status, _) = request(
            &app,
            "POST",
            &format!("/api/v1/rooms/{room_id}/reviews"),
            Some(&token),
            Some(json!({ "payload": "stay", "rating": rating })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (_, detail) = request(&app, "GET", &format!("/api/v1/rooms/{room_id}"), None, None).await;
    assert_eq!(detail["rating"], 4.33);
}
