//! # Axum Helpers
//!
//! A collection of utilities, middleware, and helpers for building Axum web
//! applications.
//!
//! ## Modules
//!
//! - **[`auth`]**: JWT bearer-token verification and route-protection middleware
//! - **[`server`]**: Server setup, health checks, graceful shutdown
//! - **[`http`]**: HTTP middleware (security headers)
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON)
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>(api_routes).await?;
//!
//!     let config = ServerConfig::default();
//!     create_app(router, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export auth types
pub use auth::{require_admin, require_auth, JwtAuth, JwtClaims, JwtConfig};

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, shutdown_signal,
    HealthResponse, ShutdownCoordinator,
};

// Re-export HTTP middleware
pub use http::security_headers;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};
