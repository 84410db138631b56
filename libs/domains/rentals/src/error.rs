use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum RentalError {
    #[error("Rental not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// A referenced document does not exist ("customer" or "movie")
    #[error("Invalid {0}")]
    InvalidReference(&'static str),

    #[error("Movie {0} is not in stock")]
    OutOfStock(Uuid),

    /// The paired insert/decrement could not be committed as a unit
    #[error("Rental transaction failed: {0}")]
    Transaction(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type RentalResult<T> = Result<T, RentalError>;

impl From<RentalError> for AppError {
    fn from(err: RentalError) -> Self {
        match err {
            RentalError::NotFound(id) => AppError::NotFound(format!("Rental {} not found", id)),
            RentalError::Validation(msg) => AppError::BadRequest(msg),
            RentalError::InvalidReference(field) => {
                AppError::BadRequest(format!("Invalid {}", field))
            }
            RentalError::OutOfStock(_) => AppError::BadRequest("Movie not in stock".to_string()),
            // Store-level diagnostics stay in the logs; clients get a generic message
            RentalError::Transaction(_) => {
                AppError::InternalServerError("Rental transaction failed".to_string())
            }
            RentalError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for RentalError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for RentalError {
    fn from(err: mongodb::error::Error) -> Self {
        RentalError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for RentalError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        RentalError::Database(format!("BSON serialization error: {}", err))
    }
}

impl From<domain_customers::CustomerError> for RentalError {
    fn from(err: domain_customers::CustomerError) -> Self {
        RentalError::Database(err.to_string())
    }
}

impl From<domain_movies::MovieError> for RentalError {
    fn from(err: domain_movies::MovieError) -> Self {
        RentalError::Database(err.to_string())
    }
}
