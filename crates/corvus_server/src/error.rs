//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use corvus_core::error::{AuthError, ErrorBody};
use corvus_fs::{ContentError, ServeError};

/// Errors surfaced by API handlers.
///
/// Every variant maps to a status code plus a `{"success":false,"error":..}`
/// body; a failing request never takes the process down.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Serve(#[from] ServeError),

    #[error(transparent)]
    Content(#[from] ContentError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::AccountInactive) => StatusCode::FORBIDDEN,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Serve(ServeError::AccessDenied) => StatusCode::FORBIDDEN,
            Self::Serve(ServeError::NotFound) => StatusCode::NOT_FOUND,
            Self::Serve(ServeError::IsDirectory) => StatusCode::BAD_REQUEST,
            Self::Serve(ServeError::Io(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Content(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(ErrorBody::new(self.to_string()))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
