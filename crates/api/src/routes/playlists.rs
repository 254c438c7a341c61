//! Route definitions for the `/playlists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::playlists;
use crate::state::AppState;

/// Routes mounted at `/playlists`.
///
/// ```text
/// GET    /                  -> list
/// GET    /{id}              -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(playlists::list))
        .route("/{id}", get(playlists::get_by_id))
}
