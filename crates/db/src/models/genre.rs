use serde::Serialize;
use sqlx::FromRow;

/// A row from the `genres` table. The label itself is the primary key.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Genre {
    pub genre: String,
    pub description: String,
}

/// Genre fields supplied by the seed loader.
#[derive(Debug, Clone)]
pub struct CreateGenre {
    pub genre: String,
    pub description: String,
}
