//! Repository for the `playlists` and `playlist_songs` tables.

use setlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::playlist::{Playlist, PlaylistEntry, PlaylistWithSongs};

const COLUMNS: &str = "playlist_id, playlist_name, owner";

/// Provides read operations for playlists.
pub struct PlaylistRepo;

impl PlaylistRepo {
    /// List all playlists in id order, without their songs.
    pub async fn list(pool: &PgPool) -> Result<Vec<Playlist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists ORDER BY playlist_id");
        sqlx::query_as::<_, Playlist>(&query).fetch_all(pool).await
    }

    /// Find a playlist by ID together with its songs ordered by position.
    ///
    /// Returns `None` if no playlist with the given `id` exists.
    pub async fn find_with_songs(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlaylistWithSongs>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM playlists WHERE playlist_id = $1");
        let Some(playlist) = sqlx::query_as::<_, Playlist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
        else {
            return Ok(None);
        };

        let songs = sqlx::query_as::<_, PlaylistEntry>(
            "SELECT s.song_id, s.song_title AS title, s.release_year, a.artist_name, ps.position \
             FROM playlist_songs ps \
             JOIN songs s ON s.song_id = ps.song_id \
             JOIN artists a ON a.artist_id = s.artist_id \
             WHERE ps.playlist_id = $1 \
             ORDER BY ps.position",
        )
        .bind(id)
        .fetch_all(pool)
        .await?;

        Ok(Some(PlaylistWithSongs { playlist, songs }))
    }
}
