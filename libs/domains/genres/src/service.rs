//! Genre service - business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{GenreError, GenreResult};
use crate::models::{CreateGenre, Genre, UpdateGenre};
use crate::repository::GenreRepository;

/// Genre service providing business logic operations
pub struct GenreService<R: GenreRepository> {
    repository: Arc<R>,
}

impl<R: GenreRepository> GenreService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new genre
    #[instrument(skip(self, input), fields(genre_name = %input.name))]
    pub async fn create_genre(&self, input: CreateGenre) -> GenreResult<Genre> {
        input
            .validate()
            .map_err(|e| GenreError::Validation(e.to_string()))?;

        self.repository.create(Genre::new(input)).await
    }

    /// Get a genre by ID
    #[instrument(skip(self))]
    pub async fn get_genre(&self, id: Uuid) -> GenreResult<Genre> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(GenreError::NotFound(id))
    }

    /// List all genres
    #[instrument(skip(self))]
    pub async fn list_genres(&self) -> GenreResult<Vec<Genre>> {
        self.repository.list().await
    }

    /// Update an existing genre
    #[instrument(skip(self, input))]
    pub async fn update_genre(&self, id: Uuid, input: UpdateGenre) -> GenreResult<Genre> {
        input
            .validate()
            .map_err(|e| GenreError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(GenreError::NotFound(id))?;

        existing.apply_update(input);
        self.repository.replace(id, existing).await
    }

    /// Delete a genre
    #[instrument(skip(self))]
    pub async fn delete_genre(&self, id: Uuid) -> GenreResult<()> {
        if !self.repository.delete(id).await? {
            return Err(GenreError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: GenreRepository> Clone for GenreService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockGenreRepository;

    #[tokio::test]
    async fn test_create_genre_rejects_short_name() {
        let repo = MockGenreRepository::new();
        let service = GenreService::new(repo);

        let result = service
            .create_genre(CreateGenre {
                name: "abc".to_string(),
            })
            .await;

        assert!(matches!(result, Err(GenreError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_genre_persists() {
        let mut repo = MockGenreRepository::new();
        repo.expect_create().returning(|genre| Ok(genre));
        let service = GenreService::new(repo);

        let genre = service
            .create_genre(CreateGenre {
                name: "Thriller".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(genre.name, "Thriller");
    }

    #[tokio::test]
    async fn test_get_genre_missing_is_not_found() {
        let mut repo = MockGenreRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        let service = GenreService::new(repo);

        let result = service.get_genre(Uuid::now_v7()).await;
        assert!(matches!(result, Err(GenreError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_genre_applies_changes() {
        let mut repo = MockGenreRepository::new();
        let id = Uuid::now_v7();
        let existing = Genre {
            id,
            name: "Thriller".to_string(),
        };
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_replace().returning(|_, genre| Ok(genre));
        let service = GenreService::new(repo);

        let updated = service
            .update_genre(
                id,
                UpdateGenre {
                    name: Some("Horror".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Horror");
    }

    #[tokio::test]
    async fn test_delete_genre_missing_is_not_found() {
        let mut repo = MockGenreRepository::new();
        repo.expect_delete().returning(|_| Ok(false));
        let service = GenreService::new(repo);

        let result = service.delete_genre(Uuid::now_v7()).await;
        assert!(matches!(result, Err(GenreError::NotFound(_))));
    }
}
