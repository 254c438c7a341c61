pub mod artists;
pub mod genres;
pub mod health;
pub mod playlists;
pub mod songs;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /artists                 list
/// /artists/{id}            get
///
/// /songs                   list (?sortby=release_year|song_title), create
///
/// /genres                  list
///
/// /playlists               list
/// /playlists/{id}          get (with songs)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/artists", artists::router())
        .nest("/songs", songs::router())
        .nest("/genres", genres::router())
        .nest("/playlists", playlists::router())
}
