//! Handlers for category aggregates.

use axum::extract::State;
use axum::Json;
use sakila_db::models::category::CategoryFilmCount;
use sakila_db::repositories::CategoryRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /films-count-by-category
pub async fn count_films_by_category(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CategoryFilmCount>>> {
    let counts = CategoryRepo::count_films_by_category(&state.pool).await?;
    Ok(Json(counts))
}
