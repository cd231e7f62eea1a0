use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::models::{
    CreateMoviePayload, DeleteMoviePayload, ErrorResponse, MessageResponse, MovieResponse,
    UpdateMoviePayload,
};
use crate::state::AppState;

/// List all movies
#[utoipa::path(
    get,
    path = "/movies",
    tag = "movies",
    responses(
        (status = 200, description = "All movie records", body = Vec<MovieResponse>),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_movies(State(state): State<AppState>) -> AppResult<Json<Vec<MovieResponse>>> {
    let movies = state.movies.find_all().await?;
    Ok(Json(movies.into_iter().map(Into::into).collect()))
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "/movies",
    tag = "movies",
    request_body = CreateMoviePayload,
    responses(
        (status = 201, description = "Movie created", body = MovieResponse),
        (status = 400, description = "Missing or malformed fields", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<CreateMoviePayload>,
) -> AppResult<(StatusCode, Json<MovieResponse>)> {
    let request = payload.into_request()?;
    let movie = state.movies.create(&request).await?;
    Ok((StatusCode::CREATED, Json(movie.into())))
}

/// Replace a movie's content fields
#[utoipa::path(
    put,
    path = "/movies",
    tag = "movies",
    request_body = UpdateMoviePayload,
    responses(
        (status = 200, description = "Movie updated", body = MovieResponse),
        (status = 400, description = "Missing or malformed fields", body = ErrorResponse),
        (status = 404, description = "No movie with the given id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Json(payload): Json<UpdateMoviePayload>,
) -> AppResult<Json<MovieResponse>> {
    let request = payload.into_request()?;
    let movie = state.movies.update(&request).await?;
    Ok(Json(movie.into()))
}

/// Delete a movie by id
#[utoipa::path(
    delete,
    path = "/movies",
    tag = "movies",
    request_body = DeleteMoviePayload,
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 404, description = "No movie with the given id", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Json(payload): Json<DeleteMoviePayload>,
) -> AppResult<Json<MessageResponse>> {
    let id = payload.id()?;
    state.movies.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Movie deleted successfully".to_string(),
    }))
}
