use crate::auth::Identity;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use chrono::Utc;

/// `GET /api/content`
///
/// Returns the snapshot built at boot, serialized verbatim. The walk already
/// happened; this handler never touches the disk.
pub async fn get_content(State(state): State<AppState>, _identity: Identity) -> ApiResult<Response> {
    let snapshot = state.cache.get()?;
    Ok(Json(snapshot.as_ref()).into_response())
}

/// `GET /api/content/file/{*path}`
///
/// Re-resolves and reads from disk on every call; only the listing is
/// cached, file bytes are not.
pub async fn get_file(
    State(state): State<AppState>,
    _identity: Identity,
    Path(path): Path<String>,
) -> ApiResult<Response> {
    let (data, mime) = state.store.read(&path).await?;
    Ok(([(CONTENT_TYPE, mime)], data).into_response())
}

/// `GET /health`
///
/// Liveness check, not behind the auth gate.
pub async fn health() -> Response {
    Json(serde_json::json!({ "status": "OK", "timestamp": Utc::now() })).into_response()
}
