use axum::routing::get;
use axum::Router;

use crate::handlers::health;
use crate::state::AppState;

/// `/health`, mounted at the root rather than under `/api`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health::report))
}
