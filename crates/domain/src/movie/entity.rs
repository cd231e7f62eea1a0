//! Movie entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Movie record entity.
///
/// The `id` is assigned by the store on creation and is immutable.
/// `actors` is always an ordered sequence of names, never a raw
/// delimited string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,

    /// Movie title.
    pub title: String,

    /// Ordered actor names.
    pub actors: Vec<String>,

    /// Release year.
    pub year: i32,
}
