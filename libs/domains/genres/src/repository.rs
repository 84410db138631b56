use async_trait::async_trait;
use uuid::Uuid;

use crate::error::GenreResult;
use crate::models::Genre;

/// Repository trait for Genre persistence
///
/// Defines the data access interface for genres. Implementations can use
/// different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Insert a new genre
    async fn create(&self, genre: Genre) -> GenreResult<Genre>;

    /// Get a genre by ID
    async fn get_by_id(&self, id: Uuid) -> GenreResult<Option<Genre>>;

    /// List all genres, sorted by name
    async fn list(&self) -> GenreResult<Vec<Genre>>;

    /// Replace an existing genre document
    async fn replace(&self, id: Uuid, genre: Genre) -> GenreResult<Genre>;

    /// Delete a genre by ID, returning whether a document was removed
    async fn delete(&self, id: Uuid) -> GenreResult<bool>;
}
