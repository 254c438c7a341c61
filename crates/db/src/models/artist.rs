//! Artist entity model.

use serde::Serialize;
use setlist_core::types::DbId;
use sqlx::FromRow;

/// A row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub artist_id: DbId,
    pub artist_name: String,
    pub rating: i32,
}

/// Artist fields supplied by the seed loader.
#[derive(Debug, Clone)]
pub struct CreateArtist {
    pub artist_name: String,
    pub rating: i32,
}
