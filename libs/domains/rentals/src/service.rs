//! Rental service - orchestrates rental creation.
//!
//! `create_rental` runs a fail-fast precondition chain with no side effects
//! (validate the body, resolve the customer, resolve the movie, check stock)
//! and only then hands the built rental to the repository, whose `create`
//! commits the insert and the stock decrement as one unit. A failed call is
//! therefore always safe to retry: the preconditions re-evaluate and there is
//! no partial commit to reconcile.

use domain_customers::CustomerRepository;
use domain_movies::MovieRepository;
use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::error::{RentalError, RentalResult};
use crate::models::{CreateRental, Rental, UpdateRental};
use crate::repository::RentalRepository;

/// Rental service coordinating the rentals, customers, and movies collections
pub struct RentalService<R, C, M>
where
    R: RentalRepository,
    C: CustomerRepository,
    M: MovieRepository,
{
    repository: Arc<R>,
    customers: Arc<C>,
    movies: Arc<M>,
}

/// First validation message, the way the API reports body errors
fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .next()
        .and_then(|(field, errs)| {
            errs.first().map(|e| match &e.message {
                Some(msg) => format!("{}: {}", field, msg),
                None => format!("{}: invalid value", field),
            })
        })
        .unwrap_or_else(|| "invalid request".to_string())
}

impl<R, C, M> RentalService<R, C, M>
where
    R: RentalRepository,
    C: CustomerRepository,
    M: MovieRepository,
{
    pub fn new(repository: R, customers: C, movies: M) -> Self {
        Self {
            repository: Arc::new(repository),
            customers: Arc::new(customers),
            movies: Arc::new(movies),
        }
    }

    /// Create a rental, decrementing the movie's stock.
    ///
    /// Precondition order matters and is observable through the error
    /// returned: validation, then customer, then movie, then stock.
    #[instrument(skip(self, input), fields(customer_id = %input.customer_id, movie_id = %input.movie_id))]
    pub async fn create_rental(&self, input: CreateRental) -> RentalResult<Rental> {
        input
            .validate()
            .map_err(|e| RentalError::Validation(first_validation_message(&e)))?;

        let customer = self
            .customers
            .get_by_id(input.customer_id)
            .await?
            .ok_or(RentalError::InvalidReference("customer"))?;

        let movie = self
            .movies
            .get_by_id(input.movie_id)
            .await?
            .ok_or(RentalError::InvalidReference("movie"))?;

        if movie.number_in_stock == 0 {
            return Err(RentalError::OutOfStock(movie.id));
        }

        let rental = Rental::new(&customer, &movie, input);
        self.repository.create(rental).await
    }

    /// Get a rental by ID
    #[instrument(skip(self))]
    pub async fn get_rental(&self, id: Uuid) -> RentalResult<Rental> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(RentalError::NotFound(id))
    }

    /// List all rentals, most recent first
    #[instrument(skip(self))]
    pub async fn list_rentals(&self) -> RentalResult<Vec<Rental>> {
        self.repository.list().await
    }

    /// Replace a rental wholesale.
    ///
    /// Both references are re-resolved and re-snapshotted. Stock counts are
    /// not touched here: only creation moves stock.
    #[instrument(skip(self, input))]
    pub async fn update_rental(&self, id: Uuid, input: UpdateRental) -> RentalResult<Rental> {
        input
            .validate()
            .map_err(|e| RentalError::Validation(first_validation_message(&e)))?;

        self.repository
            .get_by_id(id)
            .await?
            .ok_or(RentalError::NotFound(id))?;

        let customer = self
            .customers
            .get_by_id(input.customer_id)
            .await?
            .ok_or(RentalError::InvalidReference("customer"))?;

        let movie = self
            .movies
            .get_by_id(input.movie_id)
            .await?
            .ok_or(RentalError::InvalidReference("movie"))?;

        let rental = Rental::rebuilt(id, &customer, &movie, input);
        self.repository.replace(id, rental).await
    }

    /// Delete a rental, returning the removed document.
    ///
    /// Stock is not restored on delete.
    #[instrument(skip(self))]
    pub async fn delete_rental(&self, id: Uuid) -> RentalResult<Rental> {
        self.repository
            .delete(id)
            .await?
            .ok_or(RentalError::NotFound(id))
    }
}

impl<R, C, M> Clone for RentalService<R, C, M>
where
    R: RentalRepository,
    C: CustomerRepository,
    M: MovieRepository,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            customers: Arc::clone(&self.customers),
            movies: Arc::clone(&self.movies),
        }
    }
}
