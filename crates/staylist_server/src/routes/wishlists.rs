//! Wishlist endpoints, all scoped to the acting identity.

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::Router;
use serde_json::json;
use staylist_interface::{WishlistDraft, WishlistPatch, WishlistRecord};

/// Routes mounted under `/api/v1/wishlists`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlists).post(create_wishlist))
        .route(
            "/:pk",
            get(wishlist_detail)
                .put(update_wishlist)
                .delete(delete_wishlist),
        )
        .route("/:pk/rooms/:room_pk", put(toggle_room))
}

async fn list_wishlists(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<Vec<WishlistRecord>>> {
    Ok(Json(state.store.wishlists_for_user(user.user_id).await?))
}

async fn create_wishlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(draft): Json<WishlistDraft>,
) -> ApiResult<(StatusCode, Json<WishlistRecord>)> {
    let wishlist = draft.validated()?;
    let created = state
        .store
        .create_wishlist(user.user_id, &wishlist)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn wishlist_detail(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
) -> ApiResult<Json<WishlistRecord>> {
    Ok(Json(state.store.get_wishlist(pk, user.user_id).await?))
}

async fn update_wishlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
    Json(patch): Json<WishlistPatch>,
) -> ApiResult<Json<WishlistRecord>> {
    let changes = patch.validated()?;
    Ok(Json(
        state
            .store
            .update_wishlist(pk, user.user_id, &changes)
            .await?,
    ))
}

async fn delete_wishlist(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_wishlist(pk, user.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn toggle_room(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path((pk, room_pk)): Path<(i64, i64)>,
) -> ApiResult<Json<serde_json::Value>> {
    let outcome = state
        .store
        .toggle_room(pk, user.user_id, room_pk)
        .await?;
    Ok(Json(json!({ "status": outcome.as_str() })))
}
