//! MongoDB implementation of RentalRepository
//!
//! The create path is the compensating-action pseudo-transaction: a
//! conditional single-document decrement runs first (atomic on the movie
//! document, so the stock check and the decrement cannot be split by a
//! concurrent writer), then the rental insert; a failed insert restores the
//! stock before the error is reported.

use async_trait::async_trait;
use domain_movies::Movie;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson, Bson},
    options::FindOptions,
    Collection, Database, IndexModel,
};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{RentalError, RentalResult};
use crate::models::Rental;
use crate::repository::RentalRepository;

/// MongoDB implementation of the RentalRepository
pub struct MongoRentalRepository {
    rentals: Collection<Rental>,
    movies: Collection<Movie>,
}

impl MongoRentalRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            rentals: db.collection("rentals"),
            movies: db.collection("movies"),
        }
    }

    /// Create indexes for the rentals collection
    pub async fn create_indexes(&self) -> RentalResult<()> {
        let indexes = vec![
            // List endpoint sorts by date_out descending
            IndexModel::builder().keys(doc! { "date_out": -1 }).build(),
            // Per-customer rental lookups
            IndexModel::builder().keys(doc! { "customer.id": 1 }).build(),
        ];

        self.rentals.create_indexes(indexes).await?;
        Ok(())
    }

    fn movie_filter(movie_id: Uuid) -> RentalResult<mongodb::bson::Document> {
        Ok(doc! { "_id": to_bson(&movie_id)? })
    }
}

#[async_trait]
impl RentalRepository for MongoRentalRepository {
    #[instrument(skip(self, rental), fields(rental_id = %rental.id, movie_id = %rental.movie.id))]
    async fn create(&self, rental: Rental) -> RentalResult<Rental> {
        // Conditional decrement: the `$gt: 0` guard and the `$inc` execute as
        // one document update, so two concurrent rentals of the last copy
        // cannot both pass.
        let guard = doc! {
            "_id": to_bson(&rental.movie.id)?,
            "number_in_stock": { "$gt": Bson::Int32(0) },
        };
        let decrement = self
            .movies
            .update_one(guard, doc! { "$inc": { "number_in_stock": -1 } })
            .await?;

        if decrement.modified_count == 0 {
            return Err(RentalError::OutOfStock(rental.movie.id));
        }

        if let Err(insert_err) = self.rentals.insert_one(&rental).await {
            // Compensate the decrement so no stock is lost without a rental
            let restore = self
                .movies
                .update_one(
                    Self::movie_filter(rental.movie.id)?,
                    doc! { "$inc": { "number_in_stock": 1 } },
                )
                .await;

            if let Err(restore_err) = restore {
                tracing::error!(
                    movie_id = %rental.movie.id,
                    error = %restore_err,
                    "Failed to restore stock after aborted rental insert"
                );
            }

            return Err(RentalError::Transaction(insert_err.to_string()));
        }

        tracing::info!(rental_id = %rental.id, movie_id = %rental.movie.id, "Rental created");
        Ok(rental)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> RentalResult<Option<Rental>> {
        let filter = doc! { "_id": to_bson(&id)? };
        let rental = self.rentals.find_one(filter).await?;
        Ok(rental)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RentalResult<Vec<Rental>> {
        let options = FindOptions::builder().sort(doc! { "date_out": -1 }).build();

        let cursor = self.rentals.find(doc! {}).with_options(options).await?;
        let rentals: Vec<Rental> = cursor.try_collect().await?;

        Ok(rentals)
    }

    #[instrument(skip(self, rental))]
    async fn replace(&self, id: Uuid, rental: Rental) -> RentalResult<Rental> {
        let filter = doc! { "_id": to_bson(&id)? };
        let result = self.rentals.replace_one(filter, &rental).await?;

        if result.matched_count == 0 {
            return Err(RentalError::NotFound(id));
        }

        tracing::info!(rental_id = %id, "Rental updated");
        Ok(rental)
    }

    // Deleting a rental does not restore the movie's stock.
    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> RentalResult<Option<Rental>> {
        let filter = doc! { "_id": to_bson(&id)? };
        let rental = self.rentals.find_one_and_delete(filter).await?;

        if rental.is_some() {
            tracing::info!(rental_id = %id, "Rental deleted");
        }
        Ok(rental)
    }
}
