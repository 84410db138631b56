//! Customers Domain
//!
//! CRUD for rental-store customers, stored in MongoDB.

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CustomerError, CustomerResult};
pub use handlers::ApiDoc;
pub use models::{CreateCustomer, Customer, UpdateCustomer};
pub use mongodb::MongoCustomerRepository;
pub use repository::CustomerRepository;
pub use service::CustomerService;
