use async_trait::async_trait;
use uuid::Uuid;

use crate::error::RentalResult;
use crate::models::Rental;

/// Repository trait for Rental persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RentalRepository: Send + Sync {
    /// Insert the rental and decrement the rented movie's stock as one unit.
    ///
    /// Contract: both writes commit or neither does. Implementations must
    /// reject with `OutOfStock` when the movie has no copies left at commit
    /// time (the caller's earlier stock check may have raced), and with
    /// `Transaction` when the pair cannot be committed.
    async fn create(&self, rental: Rental) -> RentalResult<Rental>;

    /// Get a rental by ID
    async fn get_by_id(&self, id: Uuid) -> RentalResult<Option<Rental>>;

    /// List all rentals, most recent date_out first
    async fn list(&self) -> RentalResult<Vec<Rental>>;

    /// Replace an existing rental document
    async fn replace(&self, id: Uuid, rental: Rental) -> RentalResult<Rental>;

    /// Delete a rental by ID, returning the removed document
    async fn delete(&self, id: Uuid) -> RentalResult<Option<Rental>>;
}
