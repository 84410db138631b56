use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum GenreError {
    #[error("Genre not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type GenreResult<T> = Result<T, GenreError>;

/// Convert GenreError to AppError for standardized error responses
impl From<GenreError> for AppError {
    fn from(err: GenreError) -> Self {
        match err {
            GenreError::NotFound(id) => AppError::NotFound(format!("Genre {} not found", id)),
            GenreError::Validation(msg) => AppError::BadRequest(msg),
            GenreError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for GenreError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for GenreError {
    fn from(err: mongodb::error::Error) -> Self {
        GenreError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for GenreError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        GenreError::Database(format!("BSON serialization error: {}", err))
    }
}
