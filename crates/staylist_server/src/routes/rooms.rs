//! Room endpoints, including nested reviews, amenities, and photos.

use super::PageParams;
use crate::auth::{CurrentUser, MaybeUser};
use crate::error::{ApiResult, is_not_found};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use staylist_core::{CategoryKind, Identity, PageRequest};
use staylist_error::{AuthError, AuthErrorKind, RuleError, RuleErrorKind};
use staylist_interface::{
    AmenityRecord, PhotoDraft, PhotoRecord, ReviewDraft, ReviewRecord, RoomDraft, RoomPatch,
    RoomRecord, RoomSummary, VideoDraft, VideoRecord,
};

/// Routes mounted under `/api/v1/rooms`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_rooms).post(create_room))
        .route("/amenities", get(super::amenities::list).post(super::amenities::create))
        .route(
            "/amenities/:pk",
            get(super::amenities::detail)
                .put(super::amenities::update)
                .delete(super::amenities::delete),
        )
        .route(
            "/:pk",
            get(room_detail).put(update_room).delete(delete_room),
        )
        .route("/:pk/reviews", get(room_reviews).post(create_review))
        .route("/:pk/amenities", get(room_amenities))
        .route("/:pk/photos", post(add_photo))
        .route("/:pk/video", post(add_video))
}

/// Detail body: the room record plus whether the caller owns it.
#[derive(Debug, Serialize)]
struct RoomDetailBody {
    #[serde(flatten)]
    room: RoomRecord,
    is_owner: bool,
}

/// Resolve the room, then require the acting identity to own it.
async fn require_room_owner(state: &AppState, room_id: i64, user: &Identity) -> ApiResult<()> {
    let owner = state.store.room_owner(room_id).await?;
    if !user.owns(owner) {
        return Err(AuthError::new(AuthErrorKind::Forbidden).into());
    }
    Ok(())
}

async fn list_rooms(State(state): State<AppState>) -> ApiResult<Json<Vec<RoomSummary>>> {
    Ok(Json(state.store.list_rooms().await?))
}

async fn create_room(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(draft): Json<RoomDraft>,
) -> ApiResult<(StatusCode, Json<RoomRecord>)> {
    let new_room = draft.validated()?;

    let Some(category_id) = draft.category else {
        return Err(RuleError::new(RuleErrorKind::CategoryRequired).into());
    };
    let category = match state.store.get_category(category_id).await {
        Ok(category) => category,
        Err(err) if is_not_found(&err) => {
            return Err(RuleError::new(RuleErrorKind::CategoryNotFound(category_id)).into());
        }
        Err(err) => return Err(err.into()),
    };
    if category.kind != CategoryKind::Rooms {
        return Err(
            RuleError::new(RuleErrorKind::WrongCategoryKind(category.kind.to_string())).into(),
        );
    }

    let room = state
        .store
        .create_room(user.user_id, category.id, &new_room)
        .await?;
    Ok((StatusCode::CREATED, Json(room)))
}

async fn room_detail(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Path(pk): Path<i64>,
) -> ApiResult<Json<RoomDetailBody>> {
    let room = state.store.get_room(pk).await?;
    let is_owner = user.map(|u| u.owns(room.owner.id)).unwrap_or(false);
    Ok(Json(RoomDetailBody { room, is_owner }))
}

async fn update_room(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
    Json(patch): Json<RoomPatch>,
) -> ApiResult<Json<RoomRecord>> {
    require_room_owner(&state, pk, &user).await?;
    let changes = patch.validated()?;
    Ok(Json(state.store.update_room(pk, &changes).await?))
}

async fn delete_room(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
) -> ApiResult<StatusCode> {
    require_room_owner(&state, pk, &user).await?;
    state.store.delete_room(pk).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn room_reviews(
    State(state): State<AppState>,
    Path(pk): Path<i64>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Vec<ReviewRecord>>> {
    let page = PageRequest::parse(params.page.as_deref())?;
    let reviews = state
        .store
        .reviews_for_room(pk, page.offset(state.page_size), state.page_size)
        .await?;
    Ok(Json(reviews))
}

async fn create_review(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
    Json(draft): Json<ReviewDraft>,
) -> ApiResult<(StatusCode, Json<ReviewRecord>)> {
    let review = draft.validated()?;
    let created = state
        .store
        .create_review(user.user_id, pk, &review)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn room_amenities(
    State(state): State<AppState>,
    Path(pk): Path<i64>,
    Query(params): Query<PageParams>,
) -> ApiResult<Json<Vec<AmenityRecord>>> {
    let page = PageRequest::parse(params.page.as_deref())?;
    let amenities = state
        .store
        .room_amenities(pk, page.offset(state.page_size), state.page_size)
        .await?;
    Ok(Json(amenities))
}

async fn add_photo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
    Json(draft): Json<PhotoDraft>,
) -> ApiResult<(StatusCode, Json<PhotoRecord>)> {
    require_room_owner(&state, pk, &user).await?;
    let photo = draft.validated()?;
    let created = state.store.add_photo(pk, &photo).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn add_video(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
    Json(draft): Json<VideoDraft>,
) -> ApiResult<(StatusCode, Json<VideoRecord>)> {
    require_room_owner(&state, pk, &user).await?;
    let video = draft.validated()?;
    let created = state.store.set_video(pk, &video).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
