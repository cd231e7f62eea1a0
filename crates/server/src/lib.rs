pub mod api;
pub mod banner;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod seed;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

pub use api::create_router;
pub use config::Config;
pub use db::create_pool;
pub use state::AppState;

use repositories::SqliteMovieRepository;

pub async fn run_server(
    addr: SocketAddr,
    config: Config,
    seed_data: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let pool = create_pool(&config).await?;
    let movies = Arc::new(SqliteMovieRepository::new(pool));

    if seed_data {
        seed::seed_movies(movies.as_ref()).await?;
    }

    let state = AppState::new(movies, config);
    let app = create_router(state);

    banner::print_banner();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
