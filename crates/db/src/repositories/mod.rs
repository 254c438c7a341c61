//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod artist_repo;
pub mod genre_repo;
pub mod playlist_repo;
pub mod song_repo;
pub mod stats_repo;

pub use artist_repo::ArtistRepo;
pub use genre_repo::GenreRepo;
pub use playlist_repo::PlaylistRepo;
pub use song_repo::SongRepo;
pub use stats_repo::StatsRepo;
