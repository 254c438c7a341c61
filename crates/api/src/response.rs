//! Response envelope types for API handlers.
//!
//! Every resource payload is wrapped in an object keyed by the resource
//! name, e.g. `{ "artists": [...] }` or `{ "song": {...} }`.

use serde::Serialize;
use setlist_db::models::artist::Artist;
use setlist_db::models::genre::Genre;
use setlist_db::models::playlist::{Playlist, PlaylistWithSongs};
use setlist_db::models::song::{Song, SongListing};

#[derive(Debug, Serialize)]
pub struct ArtistsResponse {
    pub artists: Vec<Artist>,
}

#[derive(Debug, Serialize)]
pub struct ArtistResponse {
    pub artist: Artist,
}

#[derive(Debug, Serialize)]
pub struct SongsResponse {
    pub songs: Vec<SongListing>,
}

#[derive(Debug, Serialize)]
pub struct SongResponse {
    pub song: Song,
}

#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub genres: Vec<Genre>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistsResponse {
    pub playlists: Vec<Playlist>,
}

#[derive(Debug, Serialize)]
pub struct PlaylistResponse {
    pub playlist: PlaylistWithSongs,
}
