//! Handlers for the `/songs` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use setlist_core::catalog::{self, SongSort, ENTITY_ARTIST, ENTITY_GENRE};
use setlist_core::error::CoreError;
use setlist_db::models::song::CreateSong;
use setlist_db::repositories::{ArtistRepo, GenreRepo, SongRepo};

use crate::error::{AppError, AppResult};
use crate::extractors::{ValidJson, ValidQuery};
use crate::query::SongListParams;
use crate::response::{SongResponse, SongsResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/songs?sortby=release_year|song_title
///
/// Lists every song with its artist name. Ordering defaults to release year.
pub async fn list(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<SongListParams>,
) -> AppResult<Json<SongsResponse>> {
    let sort = SongSort::from_param(params.sortby.as_deref())?;
    let songs = SongRepo::list(&state.pool, sort).await?;
    tracing::debug!(count = songs.len(), %sort, "Listed songs");
    Ok(Json(SongsResponse { songs }))
}

/// POST /api/songs
///
/// Creates a song for an existing artist and genre. Nothing is written when
/// either reference is missing.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateSong>,
) -> AppResult<(StatusCode, Json<SongResponse>)> {
    catalog::validate_song_title(&input.song_title)?;
    catalog::validate_release_year(input.release_year)?;

    if !ArtistRepo::exists(&state.pool, input.artist_id).await? {
        return Err(AppError::not_found(ENTITY_ARTIST, input.artist_id));
    }
    if !GenreRepo::exists(&state.pool, &input.genre).await? {
        return Err(AppError::Core(CoreError::NotFoundByKey {
            entity: ENTITY_GENRE,
            key: input.genre,
        }));
    }

    let song = SongRepo::create(&state.pool, &input).await?;
    tracing::debug!(song_id = song.song_id, artist_id = song.artist_id, "Created song");
    Ok((StatusCode::CREATED, Json(SongResponse { song })))
}
