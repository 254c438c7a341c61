//! Song entity model and DTOs.

use serde::{Deserialize, Serialize};
use setlist_core::types::DbId;
use sqlx::FromRow;

/// A row from the `songs` table, as returned after an insert.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Song {
    pub song_id: DbId,
    pub song_title: String,
    pub release_year: i32,
    pub artist_id: DbId,
    pub genre: String,
}

/// A song joined with its artist, as shown in listings.
///
/// `title` is `songs.song_title` under its public name.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SongListing {
    pub song_id: DbId,
    pub title: String,
    pub release_year: i32,
    pub genre: String,
    pub artist_name: String,
}

/// DTO for creating a new song.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSong {
    pub song_title: String,
    pub release_year: i32,
    pub artist_id: DbId,
    pub genre: String,
}
