//! Route definitions for film lookups.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, films};
use crate::state::AppState;

/// Film read routes.
///
/// ```text
/// GET /films                                          -> list_films
/// GET /films-by-category/{category}                   -> list_films_by_category
/// GET /films-by-actor-id/{actor_id}                   -> list_films_by_actor_id
/// GET /films-by-actor-lastname/{last_name}            -> list_films_by_actor_last_name
/// GET /films-by-actor-lastname-starting-with/{prefix} -> list_films_by_actor_last_name_prefix
/// GET /films-count-by-category                        -> count_films_by_category
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/films", get(films::list_films))
        .route(
            "/films-by-category/{category}",
            get(films::list_films_by_category),
        )
        .route(
            "/films-by-actor-id/{actor_id}",
            get(films::list_films_by_actor_id),
        )
        .route(
            "/films-by-actor-lastname/{last_name}",
            get(films::list_films_by_actor_last_name),
        )
        .route(
            "/films-by-actor-lastname-starting-with/{prefix}",
            get(films::list_films_by_actor_last_name_prefix),
        )
        .route(
            "/films-count-by-category",
            get(categories::count_films_by_category),
        )
}
