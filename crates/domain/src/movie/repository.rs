//! Movie repository trait.

use async_trait::async_trait;

use super::{CreateMovieRequest, Movie, UpdateMovieRequest};
use crate::error::DomainResult;

/// Abstract interface for movie persistence operations.
///
/// Each operation is a single pass-through to the store with no retry.
/// Concrete implementations are provided in the infrastructure layer.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Find all movies in store order.
    ///
    /// Returns the full set or an error, never a partial result.
    async fn find_all(&self) -> DomainResult<Vec<Movie>>;

    /// Persist a new movie and return it with its store-assigned id.
    async fn create(&self, request: &CreateMovieRequest) -> DomainResult<Movie>;

    /// Replace the content fields of an existing movie.
    ///
    /// Fails with `DomainError::NotFound` if no movie has the id.
    async fn update(&self, request: &UpdateMovieRequest) -> DomainResult<Movie>;

    /// Remove a movie by id.
    ///
    /// Fails with `DomainError::NotFound` if no movie has the id.
    async fn delete(&self, id: i64) -> DomainResult<()>;
}
