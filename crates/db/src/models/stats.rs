use serde::Serialize;
use sqlx::FromRow;

/// Row counts for each catalog table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct CatalogCounts {
    pub genres: i64,
    pub artists: i64,
    pub songs: i64,
    pub playlists: i64,
}
