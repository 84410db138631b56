//! Users Domain
//!
//! CRUD for API users, stored in MongoDB. Users carry the admin flag that
//! the auth middleware checks; credentials and token issuance live in an
//! external identity service, so no password material is stored here.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{CreateUser, UpdateUser, User};
pub use mongodb::MongoUserRepository;
pub use repository::UserRepository;
pub use service::UserService;
