use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CustomerResult;
use crate::models::Customer;

/// Repository trait for Customer persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer
    async fn create(&self, customer: Customer) -> CustomerResult<Customer>;

    /// Get a customer by ID
    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>>;

    /// List all customers, sorted by name
    async fn list(&self) -> CustomerResult<Vec<Customer>>;

    /// Replace an existing customer document
    async fn replace(&self, id: Uuid, customer: Customer) -> CustomerResult<Customer>;

    /// Delete a customer by ID, returning whether a document was removed
    async fn delete(&self, id: Uuid) -> CustomerResult<bool>;
}
