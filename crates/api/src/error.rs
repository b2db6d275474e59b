use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sakila_core::error::CoreError;
use serde_json::json;

/// Body text of every failed request.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application-level error type for HTTP handlers.
///
/// Clients see exactly one failure shape: status 500 with
/// `{"error": "Internal Server Error"}`. The underlying cause is only
/// written to the server log.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `sakila_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx, including a closed or exhausted pool.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request could not be extracted (bad path parameter or JSON body).
    #[error("Rejected request: {0}")]
    Rejected(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::Rejected(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Core(err) => tracing::error!(error = %err, "Domain error"),
            AppError::Database(err) => tracing::error!(error = %err, "Database error"),
            AppError::Rejected(msg) => tracing::error!(error = %msg, "Request rejected"),
        }

        internal_error_response()
    }
}

/// The generic 500 response shared by handler errors and panic recovery.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        axum::Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}
