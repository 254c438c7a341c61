//! Route definitions for the `/songs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::songs;
use crate::state::AppState;

/// Routes mounted at `/songs`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(songs::list).post(songs::create))
}
