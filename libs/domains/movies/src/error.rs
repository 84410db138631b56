use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum MovieError {
    #[error("Movie not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid genre: {0}")]
    InvalidGenre(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

pub type MovieResult<T> = Result<T, MovieError>;

impl From<MovieError> for AppError {
    fn from(err: MovieError) -> Self {
        match err {
            MovieError::NotFound(id) => AppError::NotFound(format!("Movie {} not found", id)),
            MovieError::InvalidGenre(_) => AppError::BadRequest("Invalid genre".to_string()),
            MovieError::Validation(msg) => AppError::BadRequest(msg),
            MovieError::Database(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for MovieError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for MovieError {
    fn from(err: mongodb::error::Error) -> Self {
        MovieError::Database(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for MovieError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        MovieError::Database(format!("BSON serialization error: {}", err))
    }
}

impl From<domain_genres::GenreError> for MovieError {
    fn from(err: domain_genres::GenreError) -> Self {
        MovieError::Database(err.to_string())
    }
}
