//! User endpoints: sign-up, log-in, own profile.

use crate::auth::{self, CurrentUser};
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use staylist_error::{AuthError, AuthErrorKind};
use staylist_interface::{LoginDraft, NewUser, SignupDraft, UserRecord};
use tracing::info;

/// Routes mounted under `/api/v1/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sign_up))
        .route("/log-in", post(log_in))
        .route("/me", get(me))
}

async fn sign_up(
    State(state): State<AppState>,
    Json(draft): Json<SignupDraft>,
) -> ApiResult<(StatusCode, Json<UserRecord>)> {
    let signup = draft.validated()?;
    let user = NewUser {
        username: signup.username,
        email: signup.email,
        password_hash: auth::hash_password(&signup.password)?,
    };
    let created = state.store.create_user(&user).await?;
    info!(user_id = created.id, "User signed up");
    Ok((StatusCode::CREATED, Json(created)))
}

async fn log_in(
    State(state): State<AppState>,
    Json(draft): Json<LoginDraft>,
) -> ApiResult<Json<serde_json::Value>> {
    let login = draft.validated()?;
    let Some(credential) = state.store.credential(&login.username).await? else {
        return Err(AuthError::new(AuthErrorKind::InvalidCredentials).into());
    };
    if !auth::verify_password(&login.password, &credential.password_hash)? {
        return Err(AuthError::new(AuthErrorKind::InvalidCredentials).into());
    }
    let token = state.keys.issue(&credential.user)?;
    Ok(Json(json!({ "token": token })))
}

async fn me(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> ApiResult<Json<UserRecord>> {
    Ok(Json(state.store.get_user(user.user_id).await?))
}
