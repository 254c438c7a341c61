//! Custom Axum extractors.
//!
//! Axum's stock `Path`, `Query` and `Json` extractors reject with plain-text
//! bodies. These wrappers turn every rejection into [`AppError`] so malformed
//! input gets the same `{ "msg": "Bad Request." }` body as other 400s.

use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use setlist_core::catalog::parse_id;
use setlist_core::types::DbId;

use crate::error::AppError;

/// Extract and validate a positive integer id from the path.
#[derive(Debug, Clone, Copy)]
pub struct ValidId(pub DbId);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Self(parse_id(&raw)?))
    }
}

/// Query string extractor that rejects with [`AppError::BadRequest`].
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// JSON body extractor that rejects with [`AppError::BadRequest`].
///
/// Covers a missing content type, syntax errors, and missing or mistyped
/// fields.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
