//! Movie service - business logic layer
//!
//! Create and update resolve the incoming `genre_id` against the genres
//! repository and embed the resulting snapshot, so a movie never references
//! a genre that did not exist at write time.

use domain_genres::GenreRepository;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{MovieError, MovieResult};
use crate::models::{CreateMovie, GenreSummary, Movie, UpdateMovie};
use crate::repository::MovieRepository;

pub struct MovieService<R: MovieRepository, G: GenreRepository> {
    repository: Arc<R>,
    genres: Arc<G>,
}

impl<R: MovieRepository, G: GenreRepository> MovieService<R, G> {
    pub fn new(repository: R, genres: G) -> Self {
        Self {
            repository: Arc::new(repository),
            genres: Arc::new(genres),
        }
    }

    /// Create a new movie, validating the referenced genre exists
    #[instrument(skip(self, input), fields(movie_title = %input.title))]
    pub async fn create_movie(&self, input: CreateMovie) -> MovieResult<Movie> {
        input
            .validate()
            .map_err(|e| MovieError::Validation(e.to_string()))?;

        let genre = self
            .genres
            .get_by_id(input.genre_id)
            .await?
            .ok_or(MovieError::InvalidGenre(input.genre_id))?;

        self.repository.create(Movie::new(input, &genre)).await
    }

    /// Get a movie by ID
    #[instrument(skip(self))]
    pub async fn get_movie(&self, id: Uuid) -> MovieResult<Movie> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))
    }

    /// List all movies
    #[instrument(skip(self))]
    pub async fn list_movies(&self) -> MovieResult<Vec<Movie>> {
        self.repository.list().await
    }

    /// Update an existing movie, re-resolving the genre if it changed
    #[instrument(skip(self, input))]
    pub async fn update_movie(&self, id: Uuid, input: UpdateMovie) -> MovieResult<Movie> {
        input
            .validate()
            .map_err(|e| MovieError::Validation(e.to_string()))?;

        let mut existing = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(MovieError::NotFound(id))?;

        if let Some(genre_id) = input.genre_id {
            let genre = self
                .genres
                .get_by_id(genre_id)
                .await?
                .ok_or(MovieError::InvalidGenre(genre_id))?;
            existing.genre = GenreSummary::from(&genre);
        }

        existing.apply_update(input);
        self.repository.replace(id, existing).await
    }

    /// Delete a movie
    #[instrument(skip(self))]
    pub async fn delete_movie(&self, id: Uuid) -> MovieResult<()> {
        if !self.repository.delete(id).await? {
            return Err(MovieError::NotFound(id));
        }
        Ok(())
    }
}

impl<R: MovieRepository, G: GenreRepository> Clone for MovieService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            genres: Arc::clone(&self.genres),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockMovieRepository;
    use crate::test_support::MockGenreRepo;
    use domain_genres::{CreateGenre, Genre};

    fn genre() -> Genre {
        Genre::new(CreateGenre {
            name: "Thriller".to_string(),
        })
    }

    fn create_input(genre_id: Uuid) -> CreateMovie {
        CreateMovie {
            title: "Heat".to_string(),
            genre_id,
            number_in_stock: 3,
            daily_rental_rate: 2.5,
        }
    }

    #[tokio::test]
    async fn test_create_movie_with_unknown_genre_is_rejected() {
        let mut genres = MockGenreRepo::new();
        genres.expect_get_by_id().returning(|_| Ok(None));
        let service = MovieService::new(MockMovieRepository::new(), genres);

        let result = service.create_movie(create_input(Uuid::now_v7())).await;
        assert!(matches!(result, Err(MovieError::InvalidGenre(_))));
    }

    #[tokio::test]
    async fn test_create_movie_snapshots_genre() {
        let genre = genre();
        let genre_id = genre.id;

        let mut genres = MockGenreRepo::new();
        genres
            .expect_get_by_id()
            .returning(move |_| Ok(Some(genre.clone())));
        let mut repo = MockMovieRepository::new();
        repo.expect_create().returning(|movie| Ok(movie));

        let service = MovieService::new(repo, genres);
        let movie = service.create_movie(create_input(genre_id)).await.unwrap();

        assert_eq!(movie.genre.id, genre_id);
        assert_eq!(movie.genre.name, "Thriller");
    }

    #[tokio::test]
    async fn test_create_movie_rejects_negative_stock() {
        let service = MovieService::new(MockMovieRepository::new(), MockGenreRepo::new());

        let result = service
            .create_movie(CreateMovie {
                title: "Heat".to_string(),
                genre_id: Uuid::now_v7(),
                number_in_stock: -1,
                daily_rental_rate: 2.5,
            })
            .await;

        assert!(matches!(result, Err(MovieError::Validation(_))));
    }

    #[tokio::test]
    async fn test_update_movie_re_resolves_genre() {
        let old_genre = genre();
        let new_genre = Genre::new(CreateGenre {
            name: "Romance".to_string(),
        });
        let new_genre_id = new_genre.id;
        let id = Uuid::now_v7();

        let existing = Movie::new(create_input(old_genre.id), &old_genre);

        let mut genres = MockGenreRepo::new();
        genres
            .expect_get_by_id()
            .returning(move |_| Ok(Some(new_genre.clone())));
        let mut repo = MockMovieRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_replace().returning(|_, movie| Ok(movie));

        let service = MovieService::new(repo, genres);
        let updated = service
            .update_movie(
                id,
                UpdateMovie {
                    genre_id: Some(new_genre_id),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.genre.id, new_genre_id);
        assert_eq!(updated.genre.name, "Romance");
    }

    #[tokio::test]
    async fn test_get_movie_missing_is_not_found() {
        let mut repo = MockMovieRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        let service = MovieService::new(repo, MockGenreRepo::new());

        let result = service.get_movie(Uuid::now_v7()).await;
        assert!(matches!(result, Err(MovieError::NotFound(_))));
    }
}
