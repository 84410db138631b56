//! JWT bearer-token authentication.
//!
//! Tokens are issued by an external identity service; this module only
//! verifies them and guards routes:
//!
//! - [`JwtAuth`]: HS256 token verification (and encoding, for tests/tooling)
//! - [`require_auth`]: middleware rejecting requests without a valid token
//! - [`require_admin`]: middleware additionally requiring the admin flag

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::JwtConfig;
pub use jwt::{JwtAuth, JwtClaims};
pub use middleware::{require_admin, require_auth};
