use axum::Json;
use utoipa::OpenApi;

use crate::models::{
    CreateMoviePayload, DeleteMoviePayload, ErrorResponse, MessageResponse, MovieResponse,
    UpdateMoviePayload,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        version = "1.0.0"
    ),
    tags(
        (name = "movies", description = "Movie record endpoints")
    ),
    components(schemas(
        MovieResponse,
        CreateMoviePayload,
        UpdateMoviePayload,
        DeleteMoviePayload,
        ErrorResponse,
        MessageResponse
    ))
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn serve_openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
