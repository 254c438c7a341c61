//! Seed / fixture loader.
//!
//! [`run`] wipes every catalog table and re-inserts a [`SeedData`] set inside
//! one transaction. Identity sequences are restarted, so ids follow insertion
//! order starting at 1 and the foreign keys in a dataset can refer to rows by
//! their 1-based position.

mod data;

use sqlx::PgPool;

use crate::models::artist::CreateArtist;
use crate::models::genre::CreateGenre;
use crate::models::playlist::CreatePlaylist;
use crate::models::song::CreateSong;

pub use data::{development_data, test_data};

/// A complete catalog dataset.
#[derive(Debug, Clone, Default)]
pub struct SeedData {
    pub genres: Vec<CreateGenre>,
    pub artists: Vec<CreateArtist>,
    pub songs: Vec<CreateSong>,
    pub playlists: Vec<CreatePlaylist>,
}

/// Row counts written by a seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub genres: usize,
    pub artists: usize,
    pub songs: usize,
    pub playlists: usize,
}

/// Replace the catalog contents with `data`.
pub async fn run(pool: &PgPool, data: &SeedData) -> Result<SeedSummary, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        "TRUNCATE playlist_songs, playlists, songs, artists, genres RESTART IDENTITY CASCADE",
    )
    .execute(&mut *tx)
    .await?;

    for genre in &data.genres {
        sqlx::query("INSERT INTO genres (genre, description) VALUES ($1, $2)")
            .bind(&genre.genre)
            .bind(&genre.description)
            .execute(&mut *tx)
            .await?;
    }

    for artist in &data.artists {
        sqlx::query("INSERT INTO artists (artist_name, rating) VALUES ($1, $2)")
            .bind(&artist.artist_name)
            .bind(artist.rating)
            .execute(&mut *tx)
            .await?;
    }

    for song in &data.songs {
        sqlx::query(
            "INSERT INTO songs (song_title, release_year, artist_id, genre)
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&song.song_title)
        .bind(song.release_year)
        .bind(song.artist_id)
        .bind(&song.genre)
        .execute(&mut *tx)
        .await?;
    }

    for playlist in &data.playlists {
        let (playlist_id,): (i64,) = sqlx::query_as(
            "INSERT INTO playlists (playlist_name, owner) VALUES ($1, $2) RETURNING playlist_id",
        )
        .bind(&playlist.playlist_name)
        .bind(&playlist.owner)
        .fetch_one(&mut *tx)
        .await?;

        for (position, song_id) in (1_i32..).zip(&playlist.song_ids) {
            sqlx::query(
                "INSERT INTO playlist_songs (playlist_id, song_id, position) VALUES ($1, $2, $3)",
            )
            .bind(playlist_id)
            .bind(song_id)
            .bind(position)
            .execute(&mut *tx)
            .await?;
        }
    }

    tx.commit().await?;

    let summary = SeedSummary {
        genres: data.genres.len(),
        artists: data.artists.len(),
        songs: data.songs.len(),
        playlists: data.playlists.len(),
    };
    tracing::debug!(?summary, "Catalog seeded");
    Ok(summary)
}
