use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::error::MSG_PATH_NOT_FOUND;

/// Router fallback for any unmatched path.
pub async fn path_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "msg": MSG_PATH_NOT_FOUND })))
}
