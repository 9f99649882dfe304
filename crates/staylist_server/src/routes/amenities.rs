//! Amenity endpoints, mounted under `/api/v1/rooms/amenities`.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use staylist_interface::{AmenityDraft, AmenityPatch, AmenityRecord};

pub(crate) async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<AmenityRecord>>> {
    Ok(Json(state.store.list_amenities().await?))
}

pub(crate) async fn create(
    State(state): State<AppState>,
    Json(draft): Json<AmenityDraft>,
) -> ApiResult<(StatusCode, Json<AmenityRecord>)> {
    let amenity = draft.validated()?;
    let created = state.store.create_amenity(&amenity).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub(crate) async fn detail(
    State(state): State<AppState>,
    Path(pk): Path<i64>,
) -> ApiResult<Json<AmenityRecord>> {
    Ok(Json(state.store.get_amenity(pk).await?))
}

pub(crate) async fn update(
    State(state): State<AppState>,
    Path(pk): Path<i64>,
    Json(patch): Json<AmenityPatch>,
) -> ApiResult<Json<AmenityRecord>> {
    let changes = patch.validated()?;
    Ok(Json(state.store.update_amenity(pk, &changes).await?))
}

pub(crate) async fn delete(
    State(state): State<AppState>,
    Path(pk): Path<i64>,
) -> ApiResult<StatusCode> {
    state.store.delete_amenity(pk).await?;
    Ok(StatusCode::NO_CONTENT)
}
