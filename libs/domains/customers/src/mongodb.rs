//! MongoDB implementation of CustomerRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::FindOptions,
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{CustomerError, CustomerResult};
use crate::models::Customer;
use crate::repository::CustomerRepository;

/// MongoDB implementation of the CustomerRepository
pub struct MongoCustomerRepository {
    collection: Collection<Customer>,
}

impl MongoCustomerRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("customers"),
        }
    }
}

#[async_trait]
impl CustomerRepository for MongoCustomerRepository {
    #[instrument(skip(self, customer), fields(customer_id = %customer.id))]
    async fn create(&self, customer: Customer) -> CustomerResult<Customer> {
        self.collection.insert_one(&customer).await?;

        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CustomerResult<Option<Customer>> {
        let filter = doc! { "_id": to_bson(&id)? };
        let customer = self.collection.find_one(filter).await?;
        Ok(customer)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> CustomerResult<Vec<Customer>> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let customers: Vec<Customer> = cursor.try_collect().await?;

        Ok(customers)
    }

    #[instrument(skip(self, customer))]
    async fn replace(&self, id: Uuid, customer: Customer) -> CustomerResult<Customer> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.replace_one(filter, &customer).await?;

        if result.matched_count == 0 {
            return Err(CustomerError::NotFound(id));
        }

        tracing::info!(customer_id = %id, "Customer updated");
        Ok(customer)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CustomerResult<bool> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count > 0 {
            tracing::info!(customer_id = %id, "Customer deleted");
        }
        Ok(result.deleted_count > 0)
    }
}
