//! Rentals API routes
//!
//! Wires the rental coordinator to the customers and movies collections it
//! resolves references against.

use axum::Router;
use domain_customers::MongoCustomerRepository;
use domain_movies::MongoMovieRepository;
use domain_rentals::{handlers, MongoRentalRepository, RentalService};
use tracing::info;

use crate::state::AppState;

/// Create the rentals router
pub fn router(state: &AppState) -> Router {
    let repository = MongoRentalRepository::new(&state.db);
    let customers = MongoCustomerRepository::new(&state.db);
    let movies = MongoMovieRepository::new(&state.db);
    let service = RentalService::new(repository, customers, movies);

    handlers::router(service)
}

/// Initialize rental indexes in MongoDB
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoRentalRepository::new(db);
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create rental indexes: {}", e))?;
    info!("Rental collection indexes created");
    Ok(())
}
