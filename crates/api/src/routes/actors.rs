use axum::routing::put;
use axum::Router;

use crate::handlers::actors;
use crate::state::AppState;

/// ```text
/// PUT /actors/{id} -> update_actor
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/actors/{id}", put(actors::update_actor))
}
