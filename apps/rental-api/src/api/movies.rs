//! Movies API routes

use axum::Router;
use domain_genres::MongoGenreRepository;
use domain_movies::{handlers, MongoMovieRepository, MovieService};

use crate::state::AppState;

/// Create the movies router.
///
/// The service resolves `genre_id` references against the genres collection.
pub fn router(state: &AppState) -> Router {
    let repository = MongoMovieRepository::new(&state.db);
    let genres = MongoGenreRepository::new(&state.db);
    let service = MovieService::new(repository, genres);

    handlers::router(service, state.jwt.clone())
}
