//! Database library providing the MongoDB connector and shared utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//! let collection = db.collection::<Document>("rentals");
//! ```

// Always available modules
pub mod common;

// Database-specific modules (conditional based on features)
#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-exports for convenience
pub use common::{DatabaseError, DatabaseResult};
