//! Customers API routes

use axum::Router;
use domain_customers::{handlers, CustomerService, MongoCustomerRepository};

use crate::state::AppState;

/// Create the customers router
pub fn router(state: &AppState) -> Router {
    let repository = MongoCustomerRepository::new(&state.db);
    let service = CustomerService::new(repository);

    handlers::router(service, state.jwt.clone())
}
