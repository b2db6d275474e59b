/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally. Tests
/// build it around a throwaway database pool.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, the only resource shared between requests.
    pub pool: sakila_db::DbPool,
}
