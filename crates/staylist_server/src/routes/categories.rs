//! Category endpoints.

use crate::auth::CurrentUser;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use staylist_interface::{CategoryDraft, CategoryRecord};

/// Routes mounted under `/api/v1/categories`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_categories).post(create_category))
}

async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryRecord>>> {
    Ok(Json(state.store.list_categories().await?))
}

async fn create_category(
    State(state): State<AppState>,
    CurrentUser(_user): CurrentUser,
    Json(draft): Json<CategoryDraft>,
) -> ApiResult<(StatusCode, Json<CategoryRecord>)> {
    let category = draft.validated()?;
    let created = state.store.create_category(&category).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
