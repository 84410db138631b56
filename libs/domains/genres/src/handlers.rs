use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use axum_helpers::{
    auth::{require_admin, require_auth, JwtAuth},
    errors::responses::{
        BadRequestValidationResponse, ForbiddenResponse, InternalServerErrorResponse,
        NotFoundResponse, UnauthorizedResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::GenreResult;
use crate::models::{CreateGenre, Genre, UpdateGenre};
use crate::repository::GenreRepository;
use crate::service::GenreService;

/// OpenAPI documentation for the Genres API
#[derive(OpenApi)]
#[openapi(
    paths(list_genres, create_genre, get_genre, update_genre, delete_genre),
    components(
        schemas(Genre, CreateGenre, UpdateGenre),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Genres", description = "Genre management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the genres router.
///
/// Reads are public; create/update require a valid token and delete
/// additionally requires the admin flag.
pub fn router<R: GenreRepository + 'static>(service: GenreService<R>, auth: JwtAuth) -> Router {
    let service = Arc::new(service);

    let public = Router::new()
        .route("/", get(list_genres))
        .route("/{id}", get(get_genre));

    let protected = Router::new()
        .route("/", post(create_genre))
        .route("/{id}", put(update_genre))
        .route_layer(middleware::from_fn_with_state(auth.clone(), require_auth));

    let admin = Router::new()
        .route("/{id}", delete(delete_genre))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    public.merge(protected).merge(admin).with_state(service)
}

/// List all genres
#[utoipa::path(
    get,
    path = "",
    tag = "Genres",
    responses(
        (status = 200, description = "List of genres, sorted by name", body = Vec<Genre>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_genres<R: GenreRepository>(
    State(service): State<Arc<GenreService<R>>>,
) -> GenreResult<Json<Vec<Genre>>> {
    let genres = service.list_genres().await?;
    Ok(Json(genres))
}

/// Create a new genre
#[utoipa::path(
    post,
    path = "",
    tag = "Genres",
    request_body = CreateGenre,
    responses(
        (status = 201, description = "Genre created", body = Genre),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_genre<R: GenreRepository>(
    State(service): State<Arc<GenreService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateGenre>,
) -> GenreResult<impl IntoResponse> {
    let genre = service.create_genre(input).await?;
    Ok((StatusCode::CREATED, Json(genre)))
}

/// Get a genre by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Genres",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Genre found", body = Genre),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_genre<R: GenreRepository>(
    State(service): State<Arc<GenreService<R>>>,
    UuidPath(id): UuidPath,
) -> GenreResult<Json<Genre>> {
    let genre = service.get_genre(id).await?;
    Ok(Json(genre))
}

/// Update a genre
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Genres",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    request_body = UpdateGenre,
    responses(
        (status = 200, description = "Genre updated", body = Genre),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_genre<R: GenreRepository>(
    State(service): State<Arc<GenreService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateGenre>,
) -> GenreResult<Json<Genre>> {
    let genre = service.update_genre(id, input).await?;
    Ok(Json(genre))
}

/// Delete a genre (admin only)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Genres",
    params(
        ("id" = Uuid, Path, description = "Genre ID")
    ),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_genre<R: GenreRepository>(
    State(service): State<Arc<GenreService<R>>>,
    UuidPath(id): UuidPath,
) -> GenreResult<impl IntoResponse> {
    service.delete_genre(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
