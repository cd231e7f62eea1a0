use std::sync::Arc;

use domain::MovieRepository;

use crate::config::Config;

/// Shared application state.
///
/// The repository is constructed once at startup and injected here;
/// handlers reach the store only through this handle.
#[derive(Clone)]
pub struct AppState {
    pub movies: Arc<dyn MovieRepository>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(movies: Arc<dyn MovieRepository>, config: Config) -> Self {
        Self {
            movies,
            config: Arc::new(config),
        }
    }
}
