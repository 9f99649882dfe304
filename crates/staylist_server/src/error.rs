//! Error to HTTP response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use staylist_error::{AuthErrorKind, DatabaseErrorKind, StaylistError, StaylistErrorKind};

/// Result alias for request handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper that renders a [`StaylistError`] as an HTTP response.
#[derive(Debug)]
pub struct ApiError(StaylistError);

impl ApiError {
    /// The wrapped error.
    pub fn inner(&self) -> &StaylistError {
        &self.0
    }
}

impl<E> From<E> for ApiError
where
    E: Into<StaylistError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

/// Whether an error maps to a 404.
pub(crate) fn is_not_found(err: &StaylistError) -> bool {
    matches!(err.kind(), StaylistErrorKind::NotFound(_))
}

fn detail(status: StatusCode, message: impl AsRef<str>) -> Response {
    (status, Json(json!({ "detail": message.as_ref() }))).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0.kind() {
            StaylistErrorKind::Validation(err) => {
                (StatusCode::BAD_REQUEST, Json(err.errors.clone())).into_response()
            }
            StaylistErrorKind::Rule(err) => {
                detail(StatusCode::BAD_REQUEST, err.kind.to_string())
            }
            StaylistErrorKind::Auth(err) => match &err.kind {
                AuthErrorKind::Required | AuthErrorKind::InvalidToken(_) => {
                    detail(StatusCode::UNAUTHORIZED, err.kind.to_string())
                }
                AuthErrorKind::Forbidden => detail(StatusCode::FORBIDDEN, err.kind.to_string()),
                AuthErrorKind::InvalidCredentials => {
                    detail(StatusCode::BAD_REQUEST, err.kind.to_string())
                }
                AuthErrorKind::Hash(_) => {
                    tracing::error!(error = %err, "Password hashing failure");
                    detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
                }
            },
            StaylistErrorKind::NotFound(_) => detail(StatusCode::NOT_FOUND, "Not found."),
            StaylistErrorKind::Database(err) => match err.kind {
                DatabaseErrorKind::NotFound => detail(StatusCode::NOT_FOUND, "Not found."),
                _ => {
                    tracing::error!(error = %err, "Database failure");
                    detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
                }
            },
            StaylistErrorKind::Config(err) => {
                tracing::error!(error = %err, "Configuration failure");
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
            StaylistErrorKind::Server(err) => {
                tracing::error!(error = %err, "Server failure");
                detail(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        }
    }
}
