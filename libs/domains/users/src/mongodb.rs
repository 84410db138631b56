//! MongoDB implementation of UserRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::{FindOptions, IndexOptions},
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{UserError, UserResult};
use crate::models::User;
use crate::repository::UserRepository;

/// MongoDB implementation of the UserRepository
pub struct MongoUserRepository {
    collection: Collection<User>,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    /// Create indexes for the users collection.
    ///
    /// The unique email index backs the duplicate check in the service; the
    /// check-then-insert in the service is racy on its own, the index makes
    /// the constraint hold.
    pub async fn create_indexes(&self) -> UserResult<()> {
        let email_unique = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.collection.create_index(email_unique).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    async fn create(&self, user: User) -> UserResult<User> {
        self.collection.insert_one(&user).await?;

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let filter = doc! { "_id": to_bson(&id)? };
        let user = self.collection.find_one(filter).await?;
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> UserResult<Vec<User>> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let users: Vec<User> = cursor.try_collect().await?;

        Ok(users)
    }

    #[instrument(skip(self, user))]
    async fn replace(&self, id: Uuid, user: User) -> UserResult<User> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.replace_one(filter, &user).await?;

        if result.matched_count == 0 {
            return Err(UserError::NotFound(id));
        }

        tracing::info!(user_id = %id, "User updated");
        Ok(user)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> UserResult<bool> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count > 0 {
            tracing::info!(user_id = %id, "User deleted");
        }
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn exists_by_email(&self, email: &str) -> UserResult<bool> {
        let count = self
            .collection
            .count_documents(doc! { "email": email })
            .await?;
        Ok(count > 0)
    }
}
