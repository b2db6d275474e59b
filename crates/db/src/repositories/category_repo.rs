//! Repository for per-category aggregates over `category`, `film_category`
//! and `film`.

use sqlx::PgPool;

use crate::models::category::CategoryFilmCount;

/// Provides read-only category aggregates.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Count films per category name. Categories without films are omitted.
    pub async fn count_films_by_category(
        pool: &PgPool,
    ) -> Result<Vec<CategoryFilmCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryFilmCount>(
            "SELECT category.name, COUNT(film.film_id) AS film_count FROM category \
             INNER JOIN film_category ON category.category_id = film_category.category_id \
             INNER JOIN film ON film_category.film_id = film.film_id \
             GROUP BY category.name",
        )
        .fetch_all(pool)
        .await
    }
}
