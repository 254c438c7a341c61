//! Handlers for the `/artists` resource.

use axum::extract::State;
use axum::Json;
use setlist_core::catalog::ENTITY_ARTIST;
use setlist_db::repositories::ArtistRepo;

use crate::error::{AppError, AppResult};
use crate::extractors::ValidId;
use crate::response::{ArtistResponse, ArtistsResponse};
use crate::state::AppState;

/// GET /api/artists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<ArtistsResponse>> {
    let artists = ArtistRepo::list(&state.pool).await?;
    Ok(Json(ArtistsResponse { artists }))
}

/// GET /api/artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> AppResult<Json<ArtistResponse>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY_ARTIST, id))?;
    Ok(Json(ArtistResponse { artist }))
}
