//! Route definitions for the `/artists` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::artists;
use crate::state::AppState;

/// Routes mounted at `/artists`.
///
/// ```text
/// GET    /                  -> list
/// GET    /{id}              -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(artists::list))
        .route("/{id}", get(artists::get_by_id))
}
