//! Repository for the `songs` table.

use setlist_core::catalog::SongSort;
use sqlx::PgPool;

use crate::models::song::{CreateSong, Song, SongListing};

/// Column list returned by inserts.
const COLUMNS: &str = "song_id, song_title, release_year, artist_id, genre";

/// Provides listing and insert operations for songs.
pub struct SongRepo;

impl SongRepo {
    /// List every song joined with its artist name, in the requested order.
    ///
    /// The `ORDER BY` clause comes from the [`SongSort`] whitelist, never
    /// from caller-supplied text.
    pub async fn list(pool: &PgPool, sort: SongSort) -> Result<Vec<SongListing>, sqlx::Error> {
        let query = format!(
            "SELECT s.song_id, s.song_title AS title, s.release_year, s.genre, a.artist_name \
             FROM songs s \
             JOIN artists a ON a.artist_id = s.artist_id \
             ORDER BY {}",
            sort.order_clause()
        );
        sqlx::query_as::<_, SongListing>(&query)
            .fetch_all(pool)
            .await
    }

    /// Insert a new song, returning the created row.
    ///
    /// Fails with a foreign key violation if the artist or genre is missing;
    /// callers check both first to report a not-found error instead.
    pub async fn create(pool: &PgPool, input: &CreateSong) -> Result<Song, sqlx::Error> {
        let query = format!(
            "INSERT INTO songs (song_title, release_year, artist_id, genre)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Song>(&query)
            .bind(&input.song_title)
            .bind(input.release_year)
            .bind(input.artist_id)
            .bind(&input.genre)
            .fetch_one(pool)
            .await
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM songs")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
