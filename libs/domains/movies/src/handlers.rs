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
use domain_genres::GenreRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::MovieResult;
use crate::models::{CreateMovie, GenreSummary, Movie, UpdateMovie};
use crate::repository::MovieRepository;
use crate::service::MovieService;

/// OpenAPI documentation for the Movies API
#[derive(OpenApi)]
#[openapi(
    paths(list_movies, create_movie, get_movie, update_movie, delete_movie),
    components(
        schemas(Movie, GenreSummary, CreateMovie, UpdateMovie),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Movies", description = "Movie catalogue endpoints")
    )
)]
pub struct ApiDoc;

/// Create the movies router.
///
/// Reads are public; create/update require a valid token and delete
/// additionally requires the admin flag.
pub fn router<R, G>(service: MovieService<R, G>, auth: JwtAuth) -> Router
where
    R: MovieRepository + 'static,
    G: GenreRepository + 'static,
{
    let service = Arc::new(service);

    let public = Router::new()
        .route("/", get(list_movies))
        .route("/{id}", get(get_movie));

    let protected = Router::new()
        .route("/", post(create_movie))
        .route("/{id}", put(update_movie))
        .route_layer(middleware::from_fn_with_state(auth.clone(), require_auth));

    let admin = Router::new()
        .route("/{id}", delete(delete_movie))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    public.merge(protected).merge(admin).with_state(service)
}

/// List all movies
#[utoipa::path(
    get,
    path = "",
    tag = "Movies",
    responses(
        (status = 200, description = "List of movies, sorted by title", body = Vec<Movie>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_movies<R: MovieRepository, G: GenreRepository>(
    State(service): State<Arc<MovieService<R, G>>>,
) -> MovieResult<Json<Vec<Movie>>> {
    let movies = service.list_movies().await?;
    Ok(Json(movies))
}

/// Create a new movie
#[utoipa::path(
    post,
    path = "",
    tag = "Movies",
    request_body = CreateMovie,
    responses(
        (status = 201, description = "Movie created", body = Movie),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_movie<R: MovieRepository, G: GenreRepository>(
    State(service): State<Arc<MovieService<R, G>>>,
    ValidatedJson(input): ValidatedJson<CreateMovie>,
) -> MovieResult<impl IntoResponse> {
    let movie = service.create_movie(input).await?;
    Ok((StatusCode::CREATED, Json(movie)))
}

/// Get a movie by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Movies",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie found", body = Movie),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_movie<R: MovieRepository, G: GenreRepository>(
    State(service): State<Arc<MovieService<R, G>>>,
    UuidPath(id): UuidPath,
) -> MovieResult<Json<Movie>> {
    let movie = service.get_movie(id).await?;
    Ok(Json(movie))
}

/// Update a movie
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Movies",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    request_body = UpdateMovie,
    responses(
        (status = 200, description = "Movie updated", body = Movie),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_movie<R: MovieRepository, G: GenreRepository>(
    State(service): State<Arc<MovieService<R, G>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateMovie>,
) -> MovieResult<Json<Movie>> {
    let movie = service.update_movie(id, input).await?;
    Ok(Json(movie))
}

/// Delete a movie (admin only)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Movies",
    params(
        ("id" = Uuid, Path, description = "Movie ID")
    ),
    responses(
        (status = 204, description = "Movie deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_movie<R: MovieRepository, G: GenreRepository>(
    State(service): State<Arc<MovieService<R, G>>>,
    UuidPath(id): UuidPath,
) -> MovieResult<impl IntoResponse> {
    service.delete_movie(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
