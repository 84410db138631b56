//! Application state management.
//!
//! Shared state passed to the per-domain route builders: configuration,
//! the MongoDB client, and the JWT verifier.

use axum_helpers::JwtAuth;
use mongodb::{Client, Database};

use crate::config::Config;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: Config,
    /// MongoDB client (cloneable, shares the underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
    /// JWT verifier handed to route builders for auth middleware
    pub jwt: JwtAuth,
}

impl AppState {
    pub fn new(config: Config, mongo_client: Client, db: Database) -> Self {
        let jwt = JwtAuth::from_config(&config.jwt);
        Self {
            config,
            mongo_client,
            db,
            jwt,
        }
    }
}
