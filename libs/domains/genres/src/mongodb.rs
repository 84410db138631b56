//! MongoDB implementation of GenreRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::FindOptions,
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{GenreError, GenreResult};
use crate::models::Genre;
use crate::repository::GenreRepository;

/// MongoDB implementation of the GenreRepository
pub struct MongoGenreRepository {
    collection: Collection<Genre>,
}

impl MongoGenreRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("genres"),
        }
    }

    /// Get the underlying collection for advanced operations
    pub fn collection(&self) -> &Collection<Genre> {
        &self.collection
    }
}

#[async_trait]
impl GenreRepository for MongoGenreRepository {
    #[instrument(skip(self, genre), fields(genre_id = %genre.id))]
    async fn create(&self, genre: Genre) -> GenreResult<Genre> {
        self.collection.insert_one(&genre).await?;

        tracing::info!(genre_id = %genre.id, "Genre created");
        Ok(genre)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> GenreResult<Option<Genre>> {
        let filter = doc! { "_id": to_bson(&id)? };
        let genre = self.collection.find_one(filter).await?;
        Ok(genre)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> GenreResult<Vec<Genre>> {
        let options = FindOptions::builder().sort(doc! { "name": 1 }).build();

        let cursor = self.collection.find(doc! {}).with_options(options).await?;
        let genres: Vec<Genre> = cursor.try_collect().await?;

        Ok(genres)
    }

    #[instrument(skip(self, genre))]
    async fn replace(&self, id: Uuid, genre: Genre) -> GenreResult<Genre> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.replace_one(filter, &genre).await?;

        if result.matched_count == 0 {
            return Err(GenreError::NotFound(id));
        }

        tracing::info!(genre_id = %id, "Genre updated");
        Ok(genre)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> GenreResult<bool> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.collection.delete_one(filter).await?;

        if result.deleted_count > 0 {
            tracing::info!(genre_id = %id, "Genre deleted");
        }
        Ok(result.deleted_count > 0)
    }
}
