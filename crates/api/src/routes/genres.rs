use axum::routing::get;
use axum::Router;

use crate::handlers::genres;
use crate::state::AppState;

/// Routes mounted at `/genres`.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(genres::list))
}
