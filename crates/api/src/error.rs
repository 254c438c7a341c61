use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use setlist_core::error::CoreError;

/// Fixed message for every 400 response.
pub const MSG_BAD_REQUEST: &str = "Bad Request.";

/// Fixed message for the router fallback.
pub const MSG_PATH_NOT_FOUND: &str = "Path not found.";

const MSG_INTERNAL: &str = "Internal Server Error.";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce `{ "msg": ... }` bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `setlist_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A malformed request. The detail is logged, never returned.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for `CoreError::NotFound`.
    pub fn not_found(entity: &'static str, id: setlist_core::types::DbId) -> Self {
        AppError::Core(CoreError::NotFound { entity, id })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, .. } | CoreError::NotFoundByKey { entity, .. } => {
                    (StatusCode::NOT_FOUND, format!("{entity} not found."))
                }
                CoreError::Validation(detail) => {
                    tracing::debug!(%detail, "Validation failed");
                    (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST.to_string())
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(detail) => {
                tracing::debug!(%detail, "Bad request");
                (StatusCode::BAD_REQUEST, MSG_BAD_REQUEST.to_string())
            }
        };

        (status, axum::Json(json!({ "msg": message }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "Resource not found.".to_string()),
        sqlx::Error::Database(db_err) => {
            let code = db_err.code();
            tracing::error!(
                error = %db_err,
                code = code.as_deref().unwrap_or("unknown"),
                "Database error"
            );
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string())
        }
    }
}
