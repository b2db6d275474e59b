//! Actor model.

use serde::Deserialize;

/// DTO for replacing an actor's first and last name.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateActor {
    pub first_name: String,
    pub last_name: String,
}
