use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CustomerError {
    #[error("Customer not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type CustomerResult<T> = Result<T, CustomerError>;

impl From<CustomerError> for AppError {
    fn from(err: CustomerError) -> Self {
        match err {
            CustomerError::NotFound(id) => {
                AppError::NotFound(format!("Customer {} not found", id))
            }
            CustomerError::Validation(msg) => AppError::BadRequest(msg),
            CustomerError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for CustomerError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CustomerError {
    fn from(err: mongodb::error::Error) -> Self {
        CustomerError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for CustomerError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        CustomerError::Database(format!("BSON serialization error: {}", err))
    }
}
