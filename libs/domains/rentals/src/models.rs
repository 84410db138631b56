use chrono::{DateTime, Utc};
use domain_customers::Customer;
use domain_movies::Movie;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Embedded customer snapshot, fixed at rental creation.
///
/// Later customer edits do not rewrite existing rentals; the snapshot keeps
/// billing history accurate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CustomerSnapshot {
    pub id: Uuid,
    pub name: String,
}

impl From<&Customer> for CustomerSnapshot {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
        }
    }
}

/// Embedded movie snapshot, fixed at rental creation.
///
/// `daily_rental_rate` is copied so the fee owed reflects the rate at the
/// time of rental, not the current catalogue price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieSnapshot {
    pub id: Uuid,
    pub title: String,
    pub daily_rental_rate: f64,
}

impl From<&Movie> for MovieSnapshot {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title.clone(),
            daily_rental_rate: movie.daily_rental_rate,
        }
    }
}

/// Rental entity - stored in MongoDB
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Rental {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Customer snapshot, immutable after creation
    pub customer: CustomerSnapshot,
    /// Movie snapshot, immutable after creation
    pub movie: MovieSnapshot,
    /// When the movie went out
    pub date_out: DateTime<Utc>,
    /// When the movie came back; set by the return flow
    pub date_returned: Option<DateTime<Utc>>,
    /// Fee charged on return
    pub rental_fee: Option<f64>,
}

/// Request body for creating a rental
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateRental {
    /// ID of an existing customer
    pub customer_id: Uuid,
    /// ID of an existing movie with stock available
    pub movie_id: Uuid,
    pub date_out: DateTime<Utc>,
    #[serde(default)]
    pub date_returned: Option<DateTime<Utc>>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub rental_fee: Option<f64>,
}

/// Request body for replacing a rental.
///
/// Same shape as [`CreateRental`]: the update route re-resolves both
/// references and rewrites the snapshots wholesale.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UpdateRental {
    pub customer_id: Uuid,
    pub movie_id: Uuid,
    pub date_out: DateTime<Utc>,
    #[serde(default)]
    pub date_returned: Option<DateTime<Utc>>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub rental_fee: Option<f64>,
}

impl Rental {
    /// Build a rental from its resolved references and the request fields
    pub fn new(customer: &Customer, movie: &Movie, input: CreateRental) -> Self {
        Self {
            id: Uuid::now_v7(),
            customer: CustomerSnapshot::from(customer),
            movie: MovieSnapshot::from(movie),
            date_out: input.date_out,
            date_returned: input.date_returned,
            rental_fee: input.rental_fee,
        }
    }

    /// Rebuild a rental wholesale for the update route, keeping its id
    pub fn rebuilt(id: Uuid, customer: &Customer, movie: &Movie, input: UpdateRental) -> Self {
        Self {
            id,
            customer: CustomerSnapshot::from(customer),
            movie: MovieSnapshot::from(movie),
            date_out: input.date_out,
            date_returned: input.date_returned,
            rental_fee: input.rental_fee,
        }
    }
}
