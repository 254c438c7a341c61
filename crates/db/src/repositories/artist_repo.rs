//! Repository for the `artists` table.

use setlist_core::types::DbId;
use sqlx::PgPool;

use crate::models::artist::Artist;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "artist_id, artist_name, rating";

/// Provides read operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// List all artists in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists ORDER BY artist_id");
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// Find an artist by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE artist_id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether an artist row with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM artists WHERE artist_id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
