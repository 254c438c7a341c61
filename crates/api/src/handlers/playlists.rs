//! Handlers for the read-only `/playlists` resource.

use axum::extract::State;
use axum::Json;
use setlist_core::catalog::ENTITY_PLAYLIST;
use setlist_db::repositories::PlaylistRepo;

use crate::error::{AppError, AppResult};
use crate::extractors::ValidId;
use crate::response::{PlaylistResponse, PlaylistsResponse};
use crate::state::AppState;

/// GET /api/playlists
pub async fn list(State(state): State<AppState>) -> AppResult<Json<PlaylistsResponse>> {
    let playlists = PlaylistRepo::list(&state.pool).await?;
    Ok(Json(PlaylistsResponse { playlists }))
}

/// GET /api/playlists/{id}
///
/// Returns the playlist with its songs in play order.
pub async fn get_by_id(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> AppResult<Json<PlaylistResponse>> {
    let playlist = PlaylistRepo::find_with_songs(&state.pool, id)
        .await?
        .ok_or(AppError::not_found(ENTITY_PLAYLIST, id))?;
    Ok(Json(PlaylistResponse { playlist }))
}
