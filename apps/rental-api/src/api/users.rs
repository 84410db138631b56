//! Users API routes

use axum::Router;
use domain_users::{handlers, MongoUserRepository, UserService};
use tracing::info;

use crate::state::AppState;

/// Create the users router
pub fn router(state: &AppState) -> Router {
    let repository = MongoUserRepository::new(&state.db);
    let service = UserService::new(repository);

    handlers::router(service, state.jwt.clone())
}

/// Initialize user indexes in MongoDB (unique email)
pub async fn init_indexes(db: &mongodb::Database) -> eyre::Result<()> {
    let repository = MongoUserRepository::new(db);
    repository
        .create_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create user indexes: {}", e))?;
    info!("User collection indexes created");
    Ok(())
}
