use async_trait::async_trait;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::User;

/// Repository trait for User persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user
    async fn create(&self, user: User) -> UserResult<User>;

    /// Get a user by ID
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// List all users, sorted by name
    async fn list(&self) -> UserResult<Vec<User>>;

    /// Replace an existing user document
    async fn replace(&self, id: Uuid, user: User) -> UserResult<User>;

    /// Delete a user by ID, returning whether a document was removed
    async fn delete(&self, id: Uuid) -> UserResult<bool>;

    /// Check if a user with the given email exists
    async fn exists_by_email(&self, email: &str) -> UserResult<bool>;
}
