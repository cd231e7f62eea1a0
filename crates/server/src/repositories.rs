mod movie;

pub use movie::SqliteMovieRepository;
