//! Category model.

use serde::Serialize;
use sqlx::FromRow;

/// Number of films linked to a category, keyed by category name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CategoryFilmCount {
    pub name: String,
    pub film_count: i64,
}
