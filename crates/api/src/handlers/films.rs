//! Handlers for film title lookups.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use sakila_core::search::like_prefix_pattern;
use sakila_core::types::DbId;
use sakila_db::models::film::FilmTitle;
use sakila_db::repositories::FilmRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /films
pub async fn list_films(State(state): State<AppState>) -> AppResult<Json<Vec<FilmTitle>>> {
    let films = FilmRepo::list_titles(&state.pool).await?;
    Ok(Json(films))
}

/// GET /films-by-category/{category}
///
/// Exact, case-sensitive match on the category name.
pub async fn list_films_by_category(
    State(state): State<AppState>,
    category: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<FilmTitle>>> {
    let Path(category) = category?;
    let films = FilmRepo::list_titles_by_category(&state.pool, &category).await?;
    Ok(Json(films))
}

/// GET /films-by-actor-id/{actor_id}
///
/// A non-numeric id is a rejected request and ends up as a 500 like
/// every other failure.
pub async fn list_films_by_actor_id(
    State(state): State<AppState>,
    actor_id: Result<Path<DbId>, PathRejection>,
) -> AppResult<Json<Vec<FilmTitle>>> {
    let Path(actor_id) = actor_id?;
    let films = FilmRepo::list_titles_by_actor_id(&state.pool, actor_id).await?;
    Ok(Json(films))
}

/// GET /films-by-actor-lastname/{last_name}
pub async fn list_films_by_actor_last_name(
    State(state): State<AppState>,
    last_name: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<FilmTitle>>> {
    let Path(last_name) = last_name?;
    let films = FilmRepo::list_titles_by_actor_last_name(&state.pool, &last_name).await?;
    Ok(Json(films))
}

/// GET /films-by-actor-lastname-starting-with/{prefix}
///
/// The prefix may be a single letter or a longer string; it is matched
/// literally against the start of the actor's last name.
pub async fn list_films_by_actor_last_name_prefix(
    State(state): State<AppState>,
    prefix: Result<Path<String>, PathRejection>,
) -> AppResult<Json<Vec<FilmTitle>>> {
    let Path(prefix) = prefix?;
    // Never empty here: the router does not match an empty segment.
    let pattern = like_prefix_pattern(&prefix)?;
    let films = FilmRepo::list_titles_by_actor_last_name_like(&state.pool, &pattern).await?;
    Ok(Json(films))
}
