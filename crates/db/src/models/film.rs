//! Film model.

use serde::Serialize;
use sqlx::FromRow;

/// A single `film.title` projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct FilmTitle {
    pub title: String,
}
