//! MongoDB implementation of MovieRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::FindOptions,
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{MovieError, MovieResult};
use crate::models::Movie;
use crate::repository::MovieRepository;

/// MongoDB implementation of the MovieRepository
pub struct MongoMovieRepository {
    collection: Collection<Movie>,
}

impl MongoMovieRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("movies"),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Movie> {
        &self.collection
    }
}

#[async_trait]
impl MovieRepository for MongoMovieRepository {
    #[instrument(skip(self, movie), fields(movie_title = %movie.title))]
    async fn create(&self, movie: Movie) -> MovieResult<Movie> {
        self.collection.insert_one(&movie).await?;

        tracing::info!(movie_id = %movie.id, "Movie created");
        Ok(movie)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> MovieResult<Option<Movie>> {
        let filter = doc! { "_id": to_bson(&id)? };
        let movie = self.collection.find_one(filter).await?;
        Ok(movie)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> MovieResult<Vec<Movie>> {
        let options = FindOptions::builder().sort(doc! { "title": 1 }).build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let movies: Vec<Movie> = cursor.try_collect().await?;

        Ok(movies)
    }

    #[instrument(skip(self, movie))]
    async fn replace(&self, id: Uuid, movie: Movie) -> MovieResult<Movie> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.replace_one(filter, &movie).await?;

        if result.matched_count == 0 {
            return Err(MovieError::NotFound(id));
        }

        tracing::info!(movie_id = %id, "Movie updated");
        Ok(movie)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> MovieResult<bool> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count > 0 {
            tracing::info!(movie_id = %id, "Movie deleted");
        }
        Ok(result.deleted_count > 0)
    }
}
