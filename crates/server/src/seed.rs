use domain::{ActorsInput, CreateMovieRequest, DomainResult, MovieRepository, YearInput};

/// Seed the store with sample movies for development
pub async fn seed_movies(movies: &dyn MovieRepository) -> DomainResult<()> {
    // Only seed an empty store
    let existing = movies.find_all().await?;
    if !existing.is_empty() {
        return Ok(());
    }

    tracing::debug!("Seeding store with sample movies...");

    let samples = [
        (
            "Inception",
            "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            2010,
        ),
        ("Spirited Away", "Rumi Hiiragi, Miyu Irino", 2001),
        ("The Godfather", "Marlon Brando, Al Pacino", 1972),
    ];

    for (title, actors, year) in samples {
        let request = CreateMovieRequest::new(
            Some(title),
            Some(&ActorsInput::Csv(actors.to_string())),
            Some(&YearInput::Number(year)),
        )
        .map_err(domain::DomainError::from)?;

        movies.create(&request).await?;
    }

    Ok(())
}
