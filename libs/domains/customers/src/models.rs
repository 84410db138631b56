use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Customer entity - stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Customer name
    pub name: String,
    /// Contact phone number
    pub phone: String,
    /// Whether the customer is in the gold program
    #[serde(default)]
    pub is_gold: bool,
}

/// DTO for creating a new customer
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCustomer {
    #[validate(length(min = 5, max = 50))]
    pub name: String,
    #[validate(length(min = 5, max = 50))]
    pub phone: String,
    #[serde(default)]
    pub is_gold: bool,
}

/// DTO for updating an existing customer
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomer {
    #[validate(length(min = 5, max = 50))]
    pub name: Option<String>,
    #[validate(length(min = 5, max = 50))]
    pub phone: Option<String>,
    pub is_gold: Option<bool>,
}

impl Customer {
    pub fn new(input: CreateCustomer) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            phone: input.phone,
            is_gold: input.is_gold,
        }
    }

    pub fn apply_update(&mut self, update: UpdateCustomer) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(is_gold) = update.is_gold {
            self.is_gold = is_gold;
        }
    }
}
