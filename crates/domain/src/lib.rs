//! Domain layer for the movie service.
//!
//! This crate contains the core domain model for the movie record
//! service: the entity, validated request types, the repository trait,
//! and the domain error taxonomy.
//!
//! # Module Structure
//!
//! The movie module contains:
//! - **Entity**: the movie record with identity
//! - **Repository**: abstract interface for data persistence (trait only)
//! - **Request**: validated creation/replacement requests with specific error types
//!
//! # Dependencies
//!
//! This crate has minimal dependencies and should not depend on any
//! infrastructure-specific crates (database, HTTP, etc.).

pub mod error;
pub mod movie;

// Re-exports for convenience
pub use error::{DomainError, DomainResult};
pub use movie::{
    ActorsInput, CreateMovieRequest, Movie, MovieRepository, MovieValidationError,
    UpdateMovieRequest, YearInput,
};
