//! Customer service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CustomerError, CustomerResult};
use crate::models::{CreateCustomer, Customer, UpdateCustomer};
use crate::repository::CustomerRepository;

pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(customer_name = %input.name))]
    pub async fn create_customer(&self, input: CreateCustomer) -> CustomerResult<Customer> {
        input
            .validate()
            .map_err(|e| CustomerError::Validation(e.to_string()))?;

        self.repository.create(Customer::new(input)).await
    }

    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: Uuid) -> CustomerResult<Customer> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_customers(&self) -> CustomerResult<Vec<Customer>> {
        self.repository.list().await
    }

    #[instrument(skip(self, input))]
    pub async fn update_customer(
        &self,
        id: Uuid,
        input: UpdateCustomer,
    ) -> CustomerResult<Customer> {
        input
            .validate()
            .map_err(|e| CustomerError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(CustomerError::NotFound(id))?;

        existing.apply_update(input);
        self.repository.replace(id, existing).await
    }

    #[instrument(skip(self))]
    pub async fn delete_customer(&self, id: Uuid) -> CustomerResult<()> {
        if !self.repository.delete(id).await? {
            return Err(CustomerError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: CustomerRepository> Clone for CustomerService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCustomerRepository;

    #[tokio::test]
    async fn test_create_customer_rejects_short_phone() {
        let service = CustomerService::new(MockCustomerRepository::new());

        let result = service
            .create_customer(CreateCustomer {
                name: "Jamie Doe".to_string(),
                phone: "123".to_string(),
                is_gold: false,
            })
            .await;

        assert!(matches!(result, Err(CustomerError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_customer_persists() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_create().returning(|customer| Ok(customer));
        let service = CustomerService::new(repo);

        let customer = service
            .create_customer(CreateCustomer {
                name: "Jamie Doe".to_string(),
                phone: "555-0101".to_string(),
                is_gold: true,
            })
            .await
            .unwrap();

        assert!(customer.is_gold);
    }

    #[tokio::test]
    async fn test_get_customer_missing_is_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        let service = CustomerService::new(repo);

        let result = service.get_customer(Uuid::now_v7()).await;
        assert!(matches!(result, Err(CustomerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_customer_missing_is_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let service = CustomerService::new(repo);

        let result = service.delete_customer(Uuid::now_v7()).await;
        assert!(matches!(result, Err(CustomerError::NotFound(_))));
    }
}
