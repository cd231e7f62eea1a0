use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use domain::{CreateMovieRequest, DomainError, DomainResult, Movie, MovieRepository, UpdateMovieRequest};

/// Common SELECT fields for movie queries
const SELECT_MOVIE: &str = r#"
    SELECT
        id, created_at, updated_at,
        title, actors, year
    FROM movies
"#;

/// SQLite-backed movie repository.
///
/// Actors are stored as a JSON text column and decoded back into the
/// ordered list on read.
pub struct SqliteMovieRepository {
    pool: SqlitePool,
}

impl SqliteMovieRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("{} WHERE id = $1", SELECT_MOVIE);
        let row = sqlx::query_as::<_, MovieRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl MovieRepository for SqliteMovieRepository {
    async fn find_all(&self) -> DomainResult<Vec<Movie>> {
        let query = format!("{} ORDER BY id", SELECT_MOVIE);
        let rows = sqlx::query_as::<_, MovieRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(persistence)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, request: &CreateMovieRequest) -> DomainResult<Movie> {
        let row = sqlx::query(
            r#"
            INSERT INTO movies (title, actors, year)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&request.title)
        .bind(encode_actors(&request.actors))
        .bind(request.year)
        .fetch_one(&self.pool)
        .await
        .map_err(persistence)?;

        let id: i64 = sqlx::Row::get(&row, "id");

        self.get_by_id(id)
            .await
            .map_err(persistence)?
            .ok_or(DomainError::NotFound)
    }

    async fn update(&self, request: &UpdateMovieRequest) -> DomainResult<Movie> {
        let result = sqlx::query(
            r#"
            UPDATE movies SET
                title = $1,
                actors = $2,
                year = $3,
                updated_at = CURRENT_TIMESTAMP
            WHERE id = $4
            "#,
        )
        .bind(&request.title)
        .bind(encode_actors(&request.actors))
        .bind(request.year)
        .bind(request.id)
        .execute(&self.pool)
        .await
        .map_err(persistence)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound);
        }

        self.get_by_id(request.id)
            .await
            .map_err(persistence)?
            .ok_or(DomainError::NotFound)
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(persistence)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }
}

fn persistence(e: sqlx::Error) -> DomainError {
    DomainError::Persistence(e.to_string())
}

fn encode_actors(actors: &[String]) -> String {
    serde_json::to_string(actors).unwrap_or_else(|_| "[]".to_string())
}

/// Internal row type for mapping SQLite results
#[derive(Debug, sqlx::FromRow)]
struct MovieRow {
    id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    title: String,
    actors: String,
    year: i32,
}

impl From<MovieRow> for Movie {
    fn from(row: MovieRow) -> Self {
        let actors = serde_json::from_str(&row.actors).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse actors column: {}", e);
            vec![]
        });

        Self {
            id: row.id,
            created_at: row.created_at,
            updated_at: row.updated_at,
            title: row.title,
            actors,
            year: row.year,
        }
    }
}
