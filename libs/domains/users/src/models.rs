use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User entity - stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address, unique across users
    pub email: String,
    /// Admin role flag, mirrored into issued tokens
    #[serde(default)]
    pub is_admin: bool,
}

/// DTO for creating a new user
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    #[validate(length(min = 5, max = 50))]
    pub name: String,
    #[validate(email, length(min = 5, max = 255))]
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// DTO for updating an existing user
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    #[validate(length(min = 5, max = 50))]
    pub name: Option<String>,
    #[validate(email, length(min = 5, max = 255))]
    pub email: Option<String>,
    pub is_admin: Option<bool>,
}

impl User {
    pub fn new(input: CreateUser) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            is_admin: input.is_admin,
        }
    }

    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(is_admin) = update.is_admin {
            self.is_admin = is_admin;
        }
    }
}
