//! Rentals Domain
//!
//! Rental CRUD plus the one piece of cross-document coordination in the
//! system: creating a rental decrements the rented movie's stock, and the two
//! writes must commit together.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Precondition chain: validate, resolve refs, stock check
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access; create() is the paired insert + decrement
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Rental with embedded customer/movie snapshots
//! └─────────────┘
//! ```
//!
//! The service checks every precondition before any write (validation,
//! customer and movie resolution, stock > 0). The MongoDB repository then
//! performs a conditional decrement (`number_in_stock > 0` in the update
//! filter, atomic at the document level) before inserting the rental, and
//! compensates the decrement if the insert fails. At no point is a rental
//! observable without its decrement. Two concurrent creations against a
//! movie with one copy race on the conditional decrement; the loser matches
//! zero documents and is rejected as out of stock.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use error::{RentalError, RentalResult};
pub use handlers::ApiDoc;
pub use models::{CreateRental, CustomerSnapshot, MovieSnapshot, Rental, UpdateRental};
pub use mongodb::MongoRentalRepository;
pub use repository::RentalRepository;
pub use service::RentalService;
