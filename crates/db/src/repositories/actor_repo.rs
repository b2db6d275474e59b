//! Repository for the `actor` table.

use sakila_core::types::DbId;
use sqlx::PgPool;

use crate::models::actor::UpdateActor;

/// Provides write access to actors.
pub struct ActorRepo;

impl ActorRepo {
    /// Replace an actor's first and last name.
    ///
    /// Returns the number of rows affected; `0` means no actor has that id.
    pub async fn update_name(
        pool: &PgPool,
        id: DbId,
        input: &UpdateActor,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE actor SET first_name = $1, last_name = $2 WHERE actor_id = $3",
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }
}
