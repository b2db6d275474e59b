//! Repository for film title lookups across `film`, `film_category`,
//! `film_actor`, `category` and `actor`.

use sakila_core::types::DbId;
use sqlx::PgPool;

use crate::models::film::FilmTitle;

/// Provides read-only title queries. Row order is whatever the database returns.
pub struct FilmRepo;

impl FilmRepo {
    /// List every film title.
    pub async fn list_titles(pool: &PgPool) -> Result<Vec<FilmTitle>, sqlx::Error> {
        sqlx::query_as::<_, FilmTitle>("SELECT title FROM film")
            .fetch_all(pool)
            .await
    }

    /// Titles of films in the category whose name equals `category` exactly.
    pub async fn list_titles_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<FilmTitle>, sqlx::Error> {
        sqlx::query_as::<_, FilmTitle>(
            "SELECT film.title FROM film \
             INNER JOIN film_category ON film.film_id = film_category.film_id \
             INNER JOIN category ON film_category.category_id = category.category_id \
             WHERE category.name = $1",
        )
        .bind(category)
        .fetch_all(pool)
        .await
    }

    /// Titles of films the given actor appears in.
    pub async fn list_titles_by_actor_id(
        pool: &PgPool,
        actor_id: DbId,
    ) -> Result<Vec<FilmTitle>, sqlx::Error> {
        sqlx::query_as::<_, FilmTitle>(
            "SELECT film.title FROM film \
             INNER JOIN film_actor ON film.film_id = film_actor.film_id \
             WHERE film_actor.actor_id = $1",
        )
        .bind(actor_id)
        .fetch_all(pool)
        .await
    }

    /// Titles of films featuring any actor whose last name equals `last_name` exactly.
    pub async fn list_titles_by_actor_last_name(
        pool: &PgPool,
        last_name: &str,
    ) -> Result<Vec<FilmTitle>, sqlx::Error> {
        sqlx::query_as::<_, FilmTitle>(
            "SELECT film.title FROM film \
             INNER JOIN film_actor ON film.film_id = film_actor.film_id \
             INNER JOIN actor ON film_actor.actor_id = actor.actor_id \
             WHERE actor.last_name = $1",
        )
        .bind(last_name)
        .fetch_all(pool)
        .await
    }

    /// Titles of films featuring any actor whose last name matches `pattern`.
    ///
    /// `pattern` is a complete `LIKE` pattern, normally built with
    /// [`sakila_core::search::like_prefix_pattern`].
    pub async fn list_titles_by_actor_last_name_like(
        pool: &PgPool,
        pattern: &str,
    ) -> Result<Vec<FilmTitle>, sqlx::Error> {
        sqlx::query_as::<_, FilmTitle>(
            "SELECT film.title FROM film \
             INNER JOIN film_actor ON film.film_id = film_actor.film_id \
             INNER JOIN actor ON film_actor.actor_id = actor.actor_id \
             WHERE actor.last_name LIKE $1",
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    }
}
