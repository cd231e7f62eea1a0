use axum::{routing::get, Router};

use crate::openapi;
use crate::state::AppState;

use super::handlers;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/movies",
            get(handlers::list_movies)
                .post(handlers::create_movie)
                .put(handlers::update_movie)
                .delete(handlers::delete_movie),
        )
        .route("/api-docs/openapi.json", get(openapi::serve_openapi))
        .with_state(state)
}
