use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use domain::{DomainError, MovieValidationError};

use crate::models::ErrorResponse;

/// Result type for request handlers.
pub type AppResult<T> = Result<T, AppError>;

/// Handler-boundary error.
///
/// Wraps domain failures and maps the taxonomy onto status codes and
/// the `{"error": ...}` body shape: validation failures become 400,
/// a missing record becomes 404, and store failures become 500 with a
/// generic message.
#[derive(Debug)]
pub struct AppError(DomainError);

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<MovieValidationError> for AppError {
    fn from(err: MovieValidationError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self.0 {
            DomainError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            DomainError::NotFound => (StatusCode::NOT_FOUND, "Movie not found".to_string()),
            DomainError::Persistence(detail) => {
                tracing::error!("Store failure: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
