use axum::extract::State;
use axum::Json;
use setlist_db::repositories::GenreRepo;

use crate::error::AppResult;
use crate::response::GenresResponse;
use crate::state::AppState;

/// GET /api/genres
pub async fn list(State(state): State<AppState>) -> AppResult<Json<GenresResponse>> {
    let genres = GenreRepo::list(&state.pool).await?;
    Ok(Json(GenresResponse { genres }))
}
