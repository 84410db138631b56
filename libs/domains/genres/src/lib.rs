//! Genres Domain
//!
//! CRUD for movie genres, stored in MongoDB. Handlers sit on a service that
//! validates input and delegates to a repository trait with a MongoDB
//! implementation.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{GenreError, GenreResult};
pub use handlers::ApiDoc;
pub use models::{CreateGenre, Genre, UpdateGenre};
pub use mongodb::MongoGenreRepository;
pub use repository::GenreRepository;
pub use service::GenreService;
