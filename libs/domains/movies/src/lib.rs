//! Movies Domain
//!
//! CRUD for the movie catalogue, stored in MongoDB. A movie embeds a
//! `{id, name}` snapshot of its genre, resolved against the genres collection
//! when the movie is created or re-pointed at another genre.
//!
//! `number_in_stock` is the contended field: rental creation decrements it
//! (see the rentals domain), so this crate only ever writes it through
//! catalogue CRUD.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::{MovieError, MovieResult};
pub use handlers::ApiDoc;
pub use models::{CreateMovie, GenreSummary, Movie, UpdateMovie};
pub use mongodb::MongoMovieRepository;
pub use repository::MovieRepository;
pub use service::MovieService;
