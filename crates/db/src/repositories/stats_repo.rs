//! Aggregate queries across the catalog tables.

use sqlx::PgPool;

use crate::models::stats::CatalogCounts;

pub struct StatsRepo;

impl StatsRepo {
    /// Count the rows of every catalog table in a single round trip.
    pub async fn catalog_counts(pool: &PgPool) -> Result<CatalogCounts, sqlx::Error> {
        sqlx::query_as::<_, CatalogCounts>(
            "SELECT (SELECT COUNT(*) FROM genres)    AS genres, \
                    (SELECT COUNT(*) FROM artists)   AS artists, \
                    (SELECT COUNT(*) FROM songs)     AS songs, \
                    (SELECT COUNT(*) FROM playlists) AS playlists",
        )
        .fetch_one(pool)
        .await
    }
}
