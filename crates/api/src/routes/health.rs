//! Liveness probe for the query service.
//!
//! Always answers 200 so load balancers can tell "process up, database
//! down" (`degraded`) apart from a dead process.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when `SELECT 1` round-trips through the pool, else `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Connections currently open in the pool, idle or checked out.
    pub pool_size: u32,
    pub pool_idle: usize,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let db_healthy = sakila_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthReport {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        pool_size: state.pool.size(),
        pool_idle: state.pool.num_idle(),
    })
}

/// ```text
/// GET /health -> report
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
