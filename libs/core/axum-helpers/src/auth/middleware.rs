use super::jwt::{JwtAuth, JwtClaims};
use crate::errors::AppError;
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Extract a JWT from the Authorization header or cookie
fn extract_token_from_request(headers: &HeaderMap) -> Option<String> {
    // Try Authorization header first: "Bearer <token>"
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|auth| auth.strip_prefix("Bearer ").map(|s| s.to_string()))
        .or_else(|| {
            // Fallback to cookie: "access_token=<token>"
            headers
                .get("cookie")
                .and_then(|v| v.to_str().ok())
                .and_then(|cookies| {
                    cookies.split(';').find_map(|cookie| {
                        let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
                        if parts.len() == 2 && parts[0] == "access_token" {
                            Some(parts[1].to_string())
                        } else {
                            None
                        }
                    })
                })
        })
}

/// Bearer-token authentication middleware.
///
/// Verifies the token signature and expiry, then inserts [`JwtClaims`] into
/// request extensions for downstream handlers and middleware.
///
/// # Example
///
/// ```ignore
/// use axum::{middleware, Router, routing::post};
/// use axum_helpers::auth::{require_auth, JwtAuth};
///
/// let auth = JwtAuth::new(secret);
///
/// let protected = Router::new()
///     .route("/genres", post(create_genre))
///     .route_layer(middleware::from_fn_with_state(auth, require_auth));
/// ```
pub async fn require_auth(
    State(auth): State<JwtAuth>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = match extract_token_from_request(&headers) {
        Some(t) => t,
        None => {
            tracing::debug!("No token found in Authorization header or cookie");
            return Err(
                AppError::Unauthorized("Access denied. No token provided".to_string())
                    .into_response(),
            );
        }
    };

    let claims = match auth.verify_token(&token) {
        Ok(c) => c,
        Err(e) => {
            tracing::debug!("Token verification failed: {}", e);
            return Err(AppError::Unauthorized("Invalid token".to_string()).into_response());
        }
    };

    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

/// Admin-role middleware.
///
/// Must be layered inside [`require_auth`], which populates the claims this
/// middleware inspects.
///
/// ```ignore
/// let admin = Router::new()
///     .route("/genres/{id}", delete(delete_genre))
///     .route_layer(middleware::from_fn(require_admin))
///     .route_layer(middleware::from_fn_with_state(auth, require_auth));
/// ```
pub async fn require_admin(request: Request, next: Next) -> Result<Response, Response> {
    match request.extensions().get::<JwtClaims>() {
        Some(claims) if claims.is_admin => Ok(next.run(request).await),
        Some(_) => Err(AppError::Forbidden("Access denied".to_string()).into_response()),
        None => {
            // require_auth was not layered outside this middleware
            tracing::error!("require_admin invoked without authenticated claims");
            Err(AppError::Unauthorized("Access denied. No token provided".to_string())
                .into_response())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, http::StatusCode, middleware, routing::get, Extension, Router};
    use tower::ServiceExt;
    use uuid::Uuid;

    async fn whoami(Extension(claims): Extension<JwtClaims>) -> String {
        claims.name
    }

    fn protected_app(auth: JwtAuth) -> Router {
        Router::new()
            .route("/whoami", get(whoami))
            .route_layer(middleware::from_fn_with_state(auth, require_auth))
    }

    fn admin_app(auth: JwtAuth) -> Router {
        Router::new()
            .route("/admin", get(|| async { "ok" }))
            .route_layer(middleware::from_fn(require_admin))
            .route_layer(middleware::from_fn_with_state(auth, require_auth))
    }

    #[tokio::test]
    async fn test_missing_token_is_401() {
        let app = protected_app(JwtAuth::new("s3cret"));

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_valid_token_passes_claims() {
        let auth = JwtAuth::new("s3cret");
        let token = auth.encode_token(Uuid::now_v7(), "Alex", false).unwrap();
        let app = protected_app(auth);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_tampered_token_is_401() {
        let auth = JwtAuth::new("s3cret");
        let token = JwtAuth::new("other")
            .encode_token(Uuid::now_v7(), "Alex", false)
            .unwrap();
        let app = protected_app(auth);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_admin_is_403() {
        let auth = JwtAuth::new("s3cret");
        let token = auth.encode_token(Uuid::now_v7(), "Alex", false).unwrap();
        let app = admin_app(auth);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/admin")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_admin_passes() {
        let auth = JwtAuth::new("s3cret");
        let token = auth.encode_token(Uuid::now_v7(), "Sam", true).unwrap();
        let app = admin_app(auth);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/admin")
                    .header("authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_cookie_token_accepted() {
        let auth = JwtAuth::new("s3cret");
        let token = auth.encode_token(Uuid::now_v7(), "Alex", false).unwrap();
        let app = protected_app(auth);

        let response = app
            .oneshot(
                HttpRequest::builder()
                    .uri("/whoami")
                    .header("cookie", format!("access_token={}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
