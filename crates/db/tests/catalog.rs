//! Integration tests for the catalog repositories and seed loader.
//!
//! Each test gets a fresh database with migrations applied, then loads the
//! fixed test dataset.

use assert_matches::assert_matches;
use setlist_core::catalog::SongSort;
use setlist_db::models::song::CreateSong;
use setlist_db::models::stats::CatalogCounts;
use setlist_db::repositories::{ArtistRepo, GenreRepo, PlaylistRepo, SongRepo, StatsRepo};
use setlist_db::seed::{self, SeedSummary};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seeded(pool: &PgPool) {
    seed::run(pool, &seed::test_data()).await.unwrap();
}

fn new_song(artist_id: i64, genre: &str) -> CreateSong {
    CreateSong {
        song_title: "test song".to_string(),
        release_year: 2025,
        artist_id,
        genre: genre.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Seed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn seed_reports_row_counts(pool: PgPool) {
    let summary = seed::run(&pool, &seed::test_data()).await.unwrap();
    assert_eq!(
        summary,
        SeedSummary {
            genres: 4,
            artists: 4,
            songs: 8,
            playlists: 2,
        }
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn reseeding_resets_rows_and_identities(pool: PgPool) {
    seeded(&pool).await;
    SongRepo::create(&pool, &new_song(1, "pop")).await.unwrap();
    assert_eq!(SongRepo::count(&pool).await.unwrap(), 9);

    seeded(&pool).await;
    assert_eq!(SongRepo::count(&pool).await.unwrap(), 8);

    let song = SongRepo::create(&pool, &new_song(1, "pop")).await.unwrap();
    assert_eq!(song.song_id, 9);
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn artists_listed_in_id_order(pool: PgPool) {
    seeded(&pool).await;
    let artists = ArtistRepo::list(&pool).await.unwrap();

    assert_eq!(artists.len(), 4);
    let ids: Vec<i64> = artists.iter().map(|a| a.artist_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(artists[0].artist_name, "Aurora Vale");
}

#[sqlx::test(migrations = "./migrations")]
async fn artist_lookup_by_id(pool: PgPool) {
    seeded(&pool).await;

    let artist = ArtistRepo::find_by_id(&pool, 3).await.unwrap().unwrap();
    assert_eq!(artist.artist_name, "Miles Crane");
    assert_eq!(artist.rating, 9);

    assert!(ArtistRepo::find_by_id(&pool, 9999).await.unwrap().is_none());
    assert!(ArtistRepo::exists(&pool, 1).await.unwrap());
    assert!(!ArtistRepo::exists(&pool, 9999).await.unwrap());
}

// ---------------------------------------------------------------------------
// Songs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn songs_sorted_by_release_year(pool: PgPool) {
    seeded(&pool).await;
    let songs = SongRepo::list(&pool, SongSort::ReleaseYear).await.unwrap();

    assert_eq!(songs.len(), 8);
    assert!(songs
        .windows(2)
        .all(|w| w[0].release_year <= w[1].release_year));
    assert_eq!(songs[0].title, "Velvet Tempo");
    assert_eq!(songs[0].artist_name, "Miles Crane");
}

#[sqlx::test(migrations = "./migrations")]
async fn songs_sorted_by_title(pool: PgPool) {
    seeded(&pool).await;
    let songs = SongRepo::list(&pool, SongSort::SongTitle).await.unwrap();

    assert!(songs.windows(2).all(|w| w[0].title <= w[1].title));
    assert_eq!(songs[0].title, "Broken Compass");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_song_returns_row(pool: PgPool) {
    seeded(&pool).await;
    let song = SongRepo::create(&pool, &new_song(1, "pop")).await.unwrap();

    assert_eq!(song.song_id, 9);
    assert_eq!(song.song_title, "test song");
    assert_eq!(song.release_year, 2025);
    assert_eq!(song.artist_id, 1);
    assert_eq!(song.genre, "pop");
}

#[sqlx::test(migrations = "./migrations")]
async fn create_song_with_missing_artist_violates_fk(pool: PgPool) {
    seeded(&pool).await;
    let result = SongRepo::create(&pool, &new_song(9999, "pop")).await;

    assert_matches!(
        result,
        Err(sqlx::Error::Database(ref e)) if e.code().as_deref() == Some("23503")
    );
    assert_eq!(SongRepo::count(&pool).await.unwrap(), 8);
}

// ---------------------------------------------------------------------------
// Genres
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn genres_listed_by_label(pool: PgPool) {
    seeded(&pool).await;
    let genres = GenreRepo::list(&pool).await.unwrap();

    let labels: Vec<&str> = genres.iter().map(|g| g.genre.as_str()).collect();
    assert_eq!(labels, vec!["electronic", "jazz", "pop", "rock"]);
    assert!(GenreRepo::exists(&pool, "jazz").await.unwrap());
    assert!(!GenreRepo::exists(&pool, "polka").await.unwrap());
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn playlist_songs_follow_position(pool: PgPool) {
    seeded(&pool).await;
    let playlist = PlaylistRepo::find_with_songs(&pool, 1)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(playlist.playlist.playlist_name, "Late Night");
    let ids: Vec<i64> = playlist.songs.iter().map(|s| s.song_id).collect();
    assert_eq!(ids, vec![3, 7, 2]);
    let positions: Vec<i32> = playlist.songs.iter().map(|s| s.position).collect();
    assert_eq!(positions, vec![1, 2, 3]);
}

#[sqlx::test(migrations = "./migrations")]
async fn missing_playlist_returns_none(pool: PgPool) {
    seeded(&pool).await;
    assert!(PlaylistRepo::find_with_songs(&pool, 9999)
        .await
        .unwrap()
        .is_none());
    assert_eq!(PlaylistRepo::list(&pool).await.unwrap().len(), 2);
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn catalog_counts_track_seed_and_inserts(pool: PgPool) {
    let empty = StatsRepo::catalog_counts(&pool).await.unwrap();
    assert_eq!(
        empty,
        CatalogCounts {
            genres: 0,
            artists: 0,
            songs: 0,
            playlists: 0,
        }
    );

    seeded(&pool).await;
    SongRepo::create(&pool, &new_song(2, "rock")).await.unwrap();

    let counts = StatsRepo::catalog_counts(&pool).await.unwrap();
    assert_eq!(
        counts,
        CatalogCounts {
            genres: 4,
            artists: 4,
            songs: 9,
            playlists: 2,
        }
    );
}
