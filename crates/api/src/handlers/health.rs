//! Liveness handler with a catalog summary.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use setlist_db::models::stats::CatalogCounts;
use setlist_db::repositories::StatsRepo;

use crate::state::AppState;

/// `GET /health` payload.
///
/// `catalog` is `null` when the counts cannot be read, in which case the
/// status is `degraded` and the response code is 503.
#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: Option<CatalogCounts>,
}

/// GET /health
pub async fn report(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let catalog = match StatsRepo::catalog_counts(&state.pool).await {
        Ok(counts) => Some(counts),
        Err(e) => {
            tracing::warn!(error = %e, "Catalog counts unavailable");
            None
        }
    };

    let (code, status) = if catalog.is_some() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let report = HealthReport {
        status,
        version: env!("CARGO_PKG_VERSION"),
        catalog,
    };
    (code, Json(report))
}
