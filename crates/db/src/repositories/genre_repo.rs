//! Repository for the `genres` table.

use sqlx::PgPool;

use crate::models::genre::Genre;

pub struct GenreRepo;

impl GenreRepo {
    /// List all genres ordered by label.
    pub async fn list(pool: &PgPool) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT genre, description FROM genres ORDER BY genre")
            .fetch_all(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, genre: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM genres WHERE genre = $1)")
                .bind(genre)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }
}
