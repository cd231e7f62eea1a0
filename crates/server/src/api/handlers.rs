mod movies;
mod ui;

pub use movies::{create_movie, delete_movie, list_movies, update_movie};
pub use ui::index;
