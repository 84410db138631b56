//! User service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{UserError, UserResult};
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;

pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new user, enforcing email uniqueness
    #[instrument(skip(self, input), fields(user_email = %input.email))]
    pub async fn create_user(&self, input: CreateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        if self.repository.exists_by_email(&input.email).await? {
            return Err(UserError::DuplicateEmail(input.email));
        }

        self.repository.create(User::new(input)).await
    }

    /// Get a user by ID
    #[instrument(skip(self))]
    pub async fn get_user(&self, id: Uuid) -> UserResult<User> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> UserResult<Vec<User>> {
        self.repository.list().await
    }

    /// Update an existing user, re-checking email uniqueness on change
    #[instrument(skip(self, input))]
    pub async fn update_user(&self, id: Uuid, input: UpdateUser) -> UserResult<User> {
        input
            .validate()
            .map_err(|e| UserError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id))?;

        if let Some(ref new_email) = input.email {
            if new_email != &existing.email && self.repository.exists_by_email(new_email).await? {
                return Err(UserError::DuplicateEmail(new_email.clone()));
            }
        }

        existing.apply_update(input);
        self.repository.replace(id, existing).await
    }

    /// Delete a user
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: Uuid) -> UserResult<()> {
        if !self.repository.delete(id).await? {
            return Err(UserError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: UserRepository> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
