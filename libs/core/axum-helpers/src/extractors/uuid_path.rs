//! UUID path parameter extractor.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for UUID path parameters.
///
/// Parses the `{id}` path parameter as a UUID. A path segment that is not a
/// syntactically valid UUID cannot name any stored document, so it is rejected
/// with 404 rather than treated as a validation failure.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::get;
/// use axum_helpers::extractors::UuidPath;
///
/// async fn get_rental(UuidPath(id): UuidPath) -> String {
///     format!("Rental ID: {}", id)
/// }
///
/// let app = Router::new().route("/rentals/{id}", get(get_rental));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(&id) {
            Ok(uuid) => Ok(UuidPath(uuid)),
            Err(_) => Err(AppError::NotFound(format!("Invalid ID: {}", id)).into_response()),
        }
    }
}
