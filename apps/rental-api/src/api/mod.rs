//! API routes module
//!
//! Wires every domain to its HTTP routes.

pub mod customers;
pub mod genres;
pub mod health;
pub mod movies;
pub mod rentals;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
/// Note: These are nested under /api by axum_helpers::create_router
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/genres", genres::router(state))
        .nest("/movies", movies::router(state))
        .nest("/customers", customers::router(state))
        .nest("/rentals", rentals::router(state))
        .nest("/users", users::router(state))
        .merge(health::router(state.clone()))
}
