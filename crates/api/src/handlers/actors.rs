//! Handlers for actor writes.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sakila_core::types::DbId;
use sakila_db::models::actor::UpdateActor;
use sakila_db::repositories::ActorRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// PUT /actors/{id}
///
/// Replace an actor's first and last name and answer with a plain-text
/// confirmation. An id that matches no actor still answers 200; the
/// update simply affects zero rows.
pub async fn update_actor(
    State(state): State<AppState>,
    id: Result<Path<DbId>, PathRejection>,
    input: Result<Json<UpdateActor>, JsonRejection>,
) -> AppResult<(StatusCode, String)> {
    let Path(actor_id) = id?;
    let Json(input) = input?;

    let rows_affected = ActorRepo::update_name(&state.pool, actor_id, &input).await?;
    if rows_affected == 0 {
        tracing::warn!(actor_id, "Actor update matched no rows");
    } else {
        tracing::info!(actor_id, rows_affected, "Actor updated");
    }

    Ok((
        StatusCode::OK,
        format!("Actor with ID {actor_id} updated successfully."),
    ))
}
