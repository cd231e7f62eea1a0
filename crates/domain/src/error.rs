//! Domain layer errors.

use thiserror::Error;

/// Domain layer error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Referenced record does not exist.
    #[error("Movie not found")]
    NotFound,

    /// Malformed or missing client input; never reaches the store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Persistence layer error (abstracted).
    #[error("Persistence error: {0}")]
    Persistence(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
