//! Route definitions.
//!
//! Every route is mounted at the root, matching the paths existing
//! clients already call.

pub mod actors;
pub mod films;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// All query routes (everything except `/health`).
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(films::router())
        .merge(actors::router())
}
