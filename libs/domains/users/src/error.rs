use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found: {0}")]
    NotFound(Uuid),

    #[error("User with email '{0}' already registered")]
    DuplicateEmail(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type UserResult<T> = Result<T, UserError>;

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(id) => AppError::NotFound(format!("User {} not found", id)),
            UserError::DuplicateEmail(email) => {
                AppError::Conflict(format!("User with email '{}' already registered", email))
            }
            UserError::Validation(msg) => AppError::BadRequest(msg),
            UserError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for UserError {
    fn from(err: mongodb::error::Error) -> Self {
        UserError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for UserError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        UserError::Database(format!("BSON serialization error: {}", err))
    }
}
