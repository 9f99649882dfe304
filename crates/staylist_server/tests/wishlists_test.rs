//! Wishlist scoping and the membership toggle.

mod common;

use axum::http::StatusCode;
use common::{create_category, create_room, obtain_token, request};
use serde_json::json;

async fn wishlist_and_room(app: &axum::Router, token: &str) -> (i64, i64) {
    let category = create_category(app, token, "Tiny homes", "rooms").await;
    let room = create_room(app, token, category, &[]).await;
    let (status, wishlist) = request(
        app,
        "POST",
        "/api/v1/wishlists",
        Some(token),
        Some(json!({ "name": "Summer" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    (
        wishlist["id"].as_i64().unwrap(),
        room["id"].as_i64().unwrap(),
    )
}

#[tokio::test]
async fn toggling_twice_restores_original_membership() {
    let app = common::app();
    let token = obtain_token(&app, "collector").await;
    let (wishlist_id, room_id) = wishlist_and_room(&app, &token).await;
    let toggle_uri = format!("/api/v1/wishlists/{wishlist_id}/rooms/{room_id}");

    let (status, body) = request(&app, "PUT", &toggle_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "added");

    let (_, detail) = request(
        &app,
        "GET",
        &format!("/api/v1/wishlists/{wishlist_id}"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(detail["rooms"].as_array().unwrap().len(), 1);

    let (status, body) = request(&app, "PUT", &toggle_uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "removed");

    let (_, detail) = request(
        &app,
        "GET",
        &format!("/api/v1/wishlists/{wishlist_id}"),
        Some(&token),
        None,
    )
    .await;
    assert!(detail["rooms"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn wishlists_resolve_only_for_their_owner() {
    let app = common::app();
    let owner = obtain_token(&app, "collector").await;
    let other = obtain_token(&app, "other").await;
    let (wishlist_id, room_id) = wishlist_and_room(&app, &owner).await;
    let uri = format!("/api/v1/wishlists/{wishlist_id}");

    // Someone else's wishlist is indistinguishable from a missing one.
    let (status, _) = request(&app, "GET", &uri, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(
        &app,
        "PUT",
        &format!("{uri}/rooms/{room_id}"),
        Some(&other),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = request(&app, "DELETE", &uri, Some(&other), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // And the member set is untouched by the failed toggle.
    let (_, detail) = request(&app, "GET", &uri, Some(&owner), None).await;
    assert!(detail["rooms"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn toggling_a_missing_room_is_a_404() {
    let app = common::app();
    let token = obtain_token(&app, "collector").await;
    let (wishlist_id, _) = wishlist_and_room(&app, &token).await;

    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/v1/wishlists/{wishlist_id}/rooms/9999"),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn wishlist_crud() {
    let app = common::app();
    let token = obtain_token(&app, "collector").await;

    // Listing requires authentication.
    let (status, _) = request(&app, "GET", "/api/v1/wishlists", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (wishlist_id, _) = wishlist_and_room(&app, &token).await;
    let uri = format!("/api/v1/wishlists/{wishlist_id}");

    let (status, listed) = request(&app, "GET", "/api/v1/wishlists", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let (status, renamed) = request(
        &app,
        "PUT",
        &uri,
        Some(&token),
        Some(json!({ "name": "Autumn" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Autumn");

    let (status, _) = request(&app, "DELETE", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = request(&app, "GET", &uri, Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
