//! Genres API routes

use axum::Router;
use domain_genres::{handlers, GenreService, MongoGenreRepository};

use crate::state::AppState;

/// Create the genres router
pub fn router(state: &AppState) -> Router {
    let repository = MongoGenreRepository::new(&state.db);
    let service = GenreService::new(repository);

    handlers::router(service, state.jwt.clone())
}
