//! Public API types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::ChatError;

// Errors

pub struct ApiError(anyhow::Error);

/// Convert `ApiError` into an Axum compatible response. Dialogue
/// errors are surfaced unchanged with a status that reflects which
/// collaborator failed; anything else is a 500.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Always log the error
        tracing::error!("{}", self.0);

        let status = match self.0.downcast_ref::<ChatError>() {
            Some(ChatError::DocumentExtraction(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            Some(ChatError::ModelCall(_)) => StatusCode::BAD_GATEWAY,
            None => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, format!("Something went wrong: {}", self.0)).into_response()
    }
}

/// Enables using `?` on functions that return `Result<_,
/// anyhow::Error>` to turn them into `Result<_, ApiError>`
impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}
