use async_trait::async_trait;
use uuid::Uuid;

use crate::error::MovieResult;
use crate::models::Movie;

/// Repository trait for Movie persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Insert a new movie
    async fn create(&self, movie: Movie) -> MovieResult<Movie>;

    /// Get a movie by ID
    async fn get_by_id(&self, id: Uuid) -> MovieResult<Option<Movie>>;

    /// List all movies, sorted by title
    async fn list(&self) -> MovieResult<Vec<Movie>>;

    /// Replace an existing movie document
    async fn replace(&self, id: Uuid, movie: Movie) -> MovieResult<Movie>;

    /// Delete a movie by ID, returning whether a document was removed
    async fn delete(&self, id: Uuid) -> MovieResult<bool>;
}
