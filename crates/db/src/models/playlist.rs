//! Playlist entity model.
//!
//! Playlists are read-only over HTTP; rows are written by the seed loader.

use serde::Serialize;
use setlist_core::types::DbId;
use sqlx::FromRow;

/// A row from the `playlists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Playlist {
    pub playlist_id: DbId,
    pub playlist_name: String,
    pub owner: String,
}

/// One entry of a playlist, joined with its song and artist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlaylistEntry {
    pub song_id: DbId,
    pub title: String,
    pub release_year: i32,
    pub artist_name: String,
    pub position: i32,
}

/// A playlist with its entries in play order.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistWithSongs {
    #[serde(flatten)]
    pub playlist: Playlist,
    pub songs: Vec<PlaylistEntry>,
}

/// Playlist fields supplied by the seed loader.
///
/// `song_ids` are stored in order; the first entry gets position 1.
#[derive(Debug, Clone)]
pub struct CreatePlaylist {
    pub playlist_name: String,
    pub owner: String,
    pub song_ids: Vec<DbId>,
}
