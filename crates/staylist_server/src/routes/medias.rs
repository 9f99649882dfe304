//! Media endpoints.

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::delete;
use axum::Router;
use staylist_error::{AuthError, AuthErrorKind};

/// Routes mounted under `/api/v1/medias`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/photos/:pk", delete(delete_photo))
        .route("/videos/:pk", delete(delete_video))
}

async fn delete_photo(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
) -> ApiResult<StatusCode> {
    let owner = state.store.photo_room_owner(pk).await?;
    if !user.owns(owner) {
        return Err(AuthError::new(AuthErrorKind::Forbidden).into());
    }
    state.store.delete_photo(pk).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn delete_video(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(pk): Path<i64>,
) -> ApiResult<StatusCode> {
    let owner = state.store.video_room_owner(pk).await?;
    if !user.owns(owner) {
        return Err(AuthError::new(AuthErrorKind::Forbidden).into());
    }
    state.store.delete_video(pk).await?;
    Ok(StatusCode::NO_CONTENT)
}
