//! Validated movie requests.
//!
//! Create and update share one validation path: raw wire input is
//! resolved here into canonical field values before any repository
//! call. Nothing downstream ever sees the raw delimited actor string.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::DomainError;

/// Actor list as it arrives on the wire: either an array of names or a
/// single comma-separated string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActorsInput {
    List(Vec<String>),
    Csv(String),
}

impl ActorsInput {
    /// Resolve into the canonical ordered list.
    ///
    /// The string form is split on commas; every segment is trimmed and
    /// empty segments are dropped. The array form gets the same
    /// trim-and-drop treatment so both forms normalize identically.
    pub fn normalize(&self) -> Vec<String> {
        let segments: Vec<&str> = match self {
            ActorsInput::List(names) => names.iter().map(String::as_str).collect(),
            ActorsInput::Csv(raw) => raw.split(',').collect(),
        };

        segments
            .into_iter()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Release year as it arrives on the wire: a number or numeric text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearInput {
    Number(i64),
    Text(String),
}

impl YearInput {
    fn resolve(&self) -> Option<i32> {
        match self {
            YearInput::Number(n) => i32::try_from(*n).ok(),
            YearInput::Text(raw) => raw.trim().parse().ok(),
        }
    }
}

/// Error when validating a movie request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MovieValidationError {
    /// A required field is absent or empty.
    #[error("Missing required fields")]
    MissingFields,

    /// The year could not be read as a number.
    #[error("Year must be a number")]
    InvalidYear,
}

impl From<MovieValidationError> for DomainError {
    fn from(err: MovieValidationError) -> Self {
        DomainError::Validation(err.to_string())
    }
}

/// Request to create a movie record.
#[derive(Debug, Clone)]
pub struct CreateMovieRequest {
    pub title: String,
    pub actors: Vec<String>,
    pub year: i32,
}

impl CreateMovieRequest {
    /// Validate and normalize raw input into a create request.
    pub fn new(
        title: Option<&str>,
        actors: Option<&ActorsInput>,
        year: Option<&YearInput>,
    ) -> Result<Self, MovieValidationError> {
        let title = title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(MovieValidationError::MissingFields)?;

        let actors = actors
            .ok_or(MovieValidationError::MissingFields)?
            .normalize();
        if actors.is_empty() {
            return Err(MovieValidationError::MissingFields);
        }

        let year = year
            .ok_or(MovieValidationError::MissingFields)?
            .resolve()
            .ok_or(MovieValidationError::InvalidYear)?;

        Ok(Self {
            title: title.to_string(),
            actors,
            year,
        })
    }
}

/// Request to replace the content fields of an existing movie record.
///
/// All three content fields are replaced together; there is no
/// partial-field update.
#[derive(Debug, Clone)]
pub struct UpdateMovieRequest {
    pub id: i64,
    pub title: String,
    pub actors: Vec<String>,
    pub year: i32,
}

impl UpdateMovieRequest {
    /// Validate and normalize raw input into an update request.
    ///
    /// A missing `id` is a validation failure, not a not-found.
    pub fn new(
        id: Option<i64>,
        title: Option<&str>,
        actors: Option<&ActorsInput>,
        year: Option<&YearInput>,
    ) -> Result<Self, MovieValidationError> {
        let id = id.ok_or(MovieValidationError::MissingFields)?;
        let fields = CreateMovieRequest::new(title, actors, year)?;

        Ok(Self {
            id,
            title: fields.title,
            actors: fields.actors,
            year: fields.year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv(raw: &str) -> ActorsInput {
        ActorsInput::Csv(raw.to_string())
    }

    #[test]
    fn test_csv_actors_normalize() {
        assert_eq!(csv("A, B ,C").normalize(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_list_actors_trimmed_and_empty_dropped() {
        let input = ActorsInput::List(vec![" A ".to_string(), String::new(), "B".to_string()]);
        assert_eq!(input.normalize(), vec!["A", "B"]);
    }

    #[test]
    fn test_create_request_valid() {
        let request = CreateMovieRequest::new(
            Some("Inception"),
            Some(&csv("Leo, Tom")),
            Some(&YearInput::Text("2010".to_string())),
        )
        .unwrap();

        assert_eq!(request.title, "Inception");
        assert_eq!(request.actors, vec!["Leo", "Tom"]);
        assert_eq!(request.year, 2010);
    }

    #[test]
    fn test_create_request_missing_title() {
        let request =
            CreateMovieRequest::new(None, Some(&csv("Leo")), Some(&YearInput::Number(2010)));
        assert_eq!(request.unwrap_err(), MovieValidationError::MissingFields);
    }

    #[test]
    fn test_create_request_blank_title() {
        let request = CreateMovieRequest::new(
            Some("   "),
            Some(&csv("Leo")),
            Some(&YearInput::Number(2010)),
        );
        assert_eq!(request.unwrap_err(), MovieValidationError::MissingFields);
    }

    #[test]
    fn test_create_request_actors_empty_after_normalization() {
        let request = CreateMovieRequest::new(
            Some("Inception"),
            Some(&csv(" , ,")),
            Some(&YearInput::Number(2010)),
        );
        assert_eq!(request.unwrap_err(), MovieValidationError::MissingFields);
    }

    #[test]
    fn test_create_request_non_numeric_year() {
        let request = CreateMovieRequest::new(
            Some("Inception"),
            Some(&csv("Leo")),
            Some(&YearInput::Text("soon".to_string())),
        );
        assert_eq!(request.unwrap_err(), MovieValidationError::InvalidYear);
    }

    #[test]
    fn test_update_request_missing_id() {
        let request = UpdateMovieRequest::new(
            None,
            Some("Inception"),
            Some(&csv("Leo")),
            Some(&YearInput::Number(2010)),
        );
        assert_eq!(request.unwrap_err(), MovieValidationError::MissingFields);
    }

    #[test]
    fn test_update_request_shares_normalization() {
        let request = UpdateMovieRequest::new(
            Some(1),
            Some("Inception"),
            Some(&csv("A, B ,C")),
            Some(&YearInput::Number(2010)),
        )
        .unwrap();

        assert_eq!(request.id, 1);
        assert_eq!(request.actors, vec!["A", "B", "C"]);
    }
}
