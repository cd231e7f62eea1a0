use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use domain::{
    ActorsInput, CreateMovieRequest, Movie, MovieValidationError, UpdateMovieRequest, YearInput,
};

/// Movie record as returned on the wire
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Movie title
    pub title: String,
    /// Ordered actor names
    pub actors: Vec<String>,
    /// Release year
    pub year: i32,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
            title: movie.title,
            actors: movie.actors,
            year: movie.year,
        }
    }
}

/// Request body for creating a movie.
///
/// Fields are optional at the wire level; absence is reported as a
/// validation failure when converting into the domain request, not as
/// a deserialization error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct CreateMoviePayload {
    /// Movie title (required)
    pub title: Option<String>,
    /// Actor names: an array of strings, or one comma-separated string
    #[schema(value_type = Option<Object>)]
    pub actors: Option<ActorsInput>,
    /// Release year: a number or numeric text
    #[schema(value_type = Option<Object>)]
    pub year: Option<YearInput>,
}

impl CreateMoviePayload {
    /// Validate and normalize into a domain request.
    pub fn into_request(self) -> Result<CreateMovieRequest, MovieValidationError> {
        CreateMovieRequest::new(self.title.as_deref(), self.actors.as_ref(), self.year.as_ref())
    }
}

/// Request body for replacing a movie
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateMoviePayload {
    /// Id of the record to replace (required)
    pub id: Option<i64>,
    /// Movie title (required)
    pub title: Option<String>,
    /// Actor names: an array of strings, or one comma-separated string
    #[schema(value_type = Option<Object>)]
    pub actors: Option<ActorsInput>,
    /// Release year: a number or numeric text
    #[schema(value_type = Option<Object>)]
    pub year: Option<YearInput>,
}

impl UpdateMoviePayload {
    /// Validate and normalize into a domain request.
    pub fn into_request(self) -> Result<UpdateMovieRequest, MovieValidationError> {
        UpdateMovieRequest::new(
            self.id,
            self.title.as_deref(),
            self.actors.as_ref(),
            self.year.as_ref(),
        )
    }
}

/// Request body for deleting a movie
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DeleteMoviePayload {
    /// Id of the record to delete (required)
    pub id: Option<i64>,
}

impl DeleteMoviePayload {
    /// A missing id is a validation failure, not a not-found.
    pub fn id(&self) -> Result<i64, MovieValidationError> {
        self.id.ok_or(MovieValidationError::MissingFields)
    }
}

/// Error response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Confirmation response body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
