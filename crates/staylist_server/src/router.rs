//! Explicit route table, assembled once at startup.

use crate::routes;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// Build the full application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1/rooms", routes::rooms::router())
        .nest("/api/v1/categories", routes::categories::router())
        .nest("/api/v1/wishlists", routes::wishlists::router())
        .nest("/api/v1/medias", routes::medias::router())
        .nest("/api/v1/users", routes::users::router())
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
