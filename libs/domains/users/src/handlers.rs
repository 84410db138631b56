use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get},
    Extension, Json, Router,
};
use axum_helpers::{
    auth::{require_admin, require_auth, JwtAuth, JwtClaims},
    errors::responses::{
        BadRequestValidationResponse, ConflictResponse, ForbiddenResponse,
        InternalServerErrorResponse, NotFoundResponse, UnauthorizedResponse,
    },
    AppError, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::UserResult;
use crate::models::{CreateUser, UpdateUser, User};
use crate::repository::UserRepository;
use crate::service::UserService;

/// OpenAPI documentation for the Users API
#[derive(OpenApi)]
#[openapi(
    paths(list_users, create_user, me, get_user, update_user, delete_user),
    components(
        schemas(User, CreateUser, UpdateUser),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            ConflictResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the users router.
///
/// Every route requires a valid token; delete additionally requires the
/// admin flag.
pub fn router<R: UserRepository + 'static>(service: UserService<R>, auth: JwtAuth) -> Router {
    let service = Arc::new(service);

    let protected = Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/me", get(me))
        .route("/{id}", get(get_user).put(update_user))
        .route_layer(middleware::from_fn_with_state(auth.clone(), require_auth));

    let admin = Router::new()
        .route("/{id}", delete(delete_user))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    protected.merge(admin).with_state(service)
}

/// List all users
#[utoipa::path(
    get,
    path = "",
    tag = "Users",
    responses(
        (status = 200, description = "List of users, sorted by name", body = Vec<User>),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_users<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
) -> UserResult<Json<Vec<User>>> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "",
    tag = "Users",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateUser>,
) -> UserResult<impl IntoResponse> {
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Get the authenticated user
#[utoipa::path(
    get,
    path = "/me",
    tag = "Users",
    responses(
        (status = 200, description = "The authenticated user", body = User),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn me<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    Extension(claims): Extension<JwtClaims>,
) -> Result<Json<User>, AppError> {
    let id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("Invalid token".to_string()))?;

    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Get a user by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
) -> UserResult<Json<User>> {
    let user = service.get_user(id).await?;
    Ok(Json(user))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 409, response = ConflictResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateUser>,
) -> UserResult<Json<User>> {
    let user = service.update_user(id, input).await?;
    Ok(Json(user))
}

/// Delete a user (admin only)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_user<R: UserRepository>(
    State(service): State<Arc<UserService<R>>>,
    UuidPath(id): UuidPath,
) -> UserResult<impl IntoResponse> {
    service.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockUserRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    fn app(repo: MockUserRepository) -> Router {
        router(UserService::new(repo), JwtAuth::new("test-secret"))
    }

    fn token_for(user_id: Uuid, is_admin: bool) -> String {
        JwtAuth::new("test-secret")
            .encode_token(user_id, "tester", is_admin)
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_users_requires_token() {
        let response = app(MockUserRepository::new())
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_me_returns_authenticated_user() {
        let user = User::new(CreateUser {
            name: "Sam Admin".to_string(),
            email: "sam@example.com".to_string(),
            is_admin: false,
        });
        let user_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_get_by_id()
            .returning(move |_| Ok(Some(user.clone())));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .uri("/me")
                    .header("authorization", format!("Bearer {}", token_for(user_id, false)))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let me: User = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(me.id, user_id);
    }

    #[tokio::test]
    async fn test_create_user_duplicate_email_is_409() {
        let mut repo = MockUserRepository::new();
        repo.expect_exists_by_email().returning(|_| Ok(true));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .header(
                        "authorization",
                        format!("Bearer {}", token_for(Uuid::now_v7(), false)),
                    )
                    .body(Body::from(
                        json!({"name": "Sam Admin", "email": "sam@example.com"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_delete_user_requires_admin() {
        let response = app(MockUserRepository::new())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", Uuid::now_v7()))
                    .header(
                        "authorization",
                        format!("Bearer {}", token_for(Uuid::now_v7(), false)),
                    )
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
