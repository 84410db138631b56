use axum::{
    extract::State,
    routing::{delete, get, put},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestValidationResponse, InternalServerErrorResponse, NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use domain_customers::CustomerRepository;
use domain_movies::MovieRepository;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::RentalResult;
use crate::models::{CreateRental, CustomerSnapshot, MovieSnapshot, Rental, UpdateRental};
use crate::repository::RentalRepository;
use crate::service::RentalService;

/// OpenAPI documentation for the Rentals API
#[derive(OpenApi)]
#[openapi(
    paths(list_rentals, create_rental, get_rental, update_rental, delete_rental),
    components(
        schemas(Rental, CustomerSnapshot, MovieSnapshot, CreateRental, UpdateRental),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Rentals", description = "Rental endpoints, including the stock-decrementing create")
    )
)]
pub struct ApiDoc;

/// Create the rentals router
pub fn router<R, C, M>(service: RentalService<R, C, M>) -> Router
where
    R: RentalRepository + 'static,
    C: CustomerRepository + 'static,
    M: MovieRepository + 'static,
{
    let service = Arc::new(service);

    Router::new()
        .route("/", get(list_rentals).post(create_rental))
        .route("/{id}", get(get_rental))
        .route("/{id}", put(update_rental))
        .route("/{id}", delete(delete_rental))
        .with_state(service)
}

/// List all rentals
#[utoipa::path(
    get,
    path = "",
    tag = "Rentals",
    responses(
        (status = 200, description = "List of rentals, most recent date_out first", body = Vec<Rental>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_rentals<R, C, M>(
    State(service): State<Arc<RentalService<R, C, M>>>,
) -> RentalResult<Json<Vec<Rental>>>
where
    R: RentalRepository,
    C: CustomerRepository,
    M: MovieRepository,
{
    let rentals = service.list_rentals().await?;
    Ok(Json(rentals))
}

/// Create a rental.
///
/// Inserts the rental and decrements the movie's stock as one unit; fails
/// with 400 when a reference is dangling or the movie is out of stock, and
/// with 500 when the paired write cannot be committed.
#[utoipa::path(
    post,
    path = "",
    tag = "Rentals",
    request_body = CreateRental,
    responses(
        (status = 200, description = "Rental created; the movie's stock was decremented", body = Rental),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_rental<R, C, M>(
    State(service): State<Arc<RentalService<R, C, M>>>,
    ValidatedJson(input): ValidatedJson<CreateRental>,
) -> RentalResult<Json<Rental>>
where
    R: RentalRepository,
    C: CustomerRepository,
    M: MovieRepository,
{
    let rental = service.create_rental(input).await?;
    Ok(Json(rental))
}

/// Get a rental by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Rentals",
    params(
        ("id" = Uuid, Path, description = "Rental ID")
    ),
    responses(
        (status = 200, description = "Rental found", body = Rental),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_rental<R, C, M>(
    State(service): State<Arc<RentalService<R, C, M>>>,
    UuidPath(id): UuidPath,
) -> RentalResult<Json<Rental>>
where
    R: RentalRepository,
    C: CustomerRepository,
    M: MovieRepository,
{
    let rental = service.get_rental(id).await?;
    Ok(Json(rental))
}

/// Replace a rental wholesale
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Rentals",
    params(
        ("id" = Uuid, Path, description = "Rental ID")
    ),
    request_body = UpdateRental,
    responses(
        (status = 200, description = "Rental updated", body = Rental),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_rental<R, C, M>(
    State(service): State<Arc<RentalService<R, C, M>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateRental>,
) -> RentalResult<Json<Rental>>
where
    R: RentalRepository,
    C: CustomerRepository,
    M: MovieRepository,
{
    let rental = service.update_rental(id, input).await?;
    Ok(Json(rental))
}

/// Delete a rental, returning the removed document
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Rentals",
    params(
        ("id" = Uuid, Path, description = "Rental ID")
    ),
    responses(
        (status = 200, description = "Rental deleted", body = Rental),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_rental<R, C, M>(
    State(service): State<Arc<RentalService<R, C, M>>>,
    UuidPath(id): UuidPath,
) -> RentalResult<Json<Rental>>
where
    R: RentalRepository,
    C: CustomerRepository,
    M: MovieRepository,
{
    let rental = service.delete_rental(id).await?;
    Ok(Json(rental))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockRentalRepository;
    use crate::test_support::{customer, movie, MockCustomerRepo, MockMovieRepo};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(
        repo: MockRentalRepository,
        customers: MockCustomerRepo,
        movies: MockMovieRepo,
    ) -> Router {
        router(RentalService::new(repo, customers, movies))
    }

    async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
        let bytes = body.collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn create_body(customer_id: Uuid, movie_id: Uuid) -> Body {
        Body::from(
            json!({
                "customer_id": customer_id,
                "movie_id": movie_id,
                "date_out": Utc::now()
            })
            .to_string(),
        )
    }

    #[tokio::test]
    async fn test_create_rental_returns_200_with_snapshot_rate() {
        let c = customer();
        let m = movie(3);
        let (customer_id, movie_id, rate) = (c.id, m.id, m.daily_rental_rate);

        let mut customers = MockCustomerRepo::new();
        customers
            .expect_get_by_id()
            .returning(move |_| Ok(Some(c.clone())));
        let mut movies = MockMovieRepo::new();
        movies
            .expect_get_by_id()
            .returning(move |_| Ok(Some(m.clone())));
        let mut repo = MockRentalRepository::new();
        repo.expect_create().returning(|rental| Ok(rental));

        let response = app(repo, customers, movies)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(create_body(customer_id, movie_id))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let rental: Rental = json_body(response.into_body()).await;
        assert_eq!(rental.movie.daily_rental_rate, rate);
        assert_eq!(rental.customer.id, customer_id);
    }

    #[tokio::test]
    async fn test_create_rental_unknown_customer_is_400() {
        let mut customers = MockCustomerRepo::new();
        customers.expect_get_by_id().returning(|_| Ok(None));
        let mut repo = MockRentalRepository::new();
        repo.expect_create().never();

        let response = app(repo, customers, MockMovieRepo::new())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(create_body(Uuid::now_v7(), Uuid::now_v7()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rental_out_of_stock_is_400() {
        let c = customer();
        let m = movie(0);
        let movie_id = m.id;

        let mut customers = MockCustomerRepo::new();
        customers
            .expect_get_by_id()
            .returning(move |_| Ok(Some(c.clone())));
        let mut movies = MockMovieRepo::new();
        movies
            .expect_get_by_id()
            .returning(move |_| Ok(Some(m.clone())));
        let mut repo = MockRentalRepository::new();
        repo.expect_create().never();

        let response = app(repo, customers, movies)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(create_body(Uuid::now_v7(), movie_id))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_rental_transaction_failure_is_500() {
        let c = customer();
        let m = movie(3);
        let movie_id = m.id;

        let mut customers = MockCustomerRepo::new();
        customers
            .expect_get_by_id()
            .returning(move |_| Ok(Some(c.clone())));
        let mut movies = MockMovieRepo::new();
        movies
            .expect_get_by_id()
            .returning(move |_| Ok(Some(m.clone())));
        let mut repo = MockRentalRepository::new();
        repo.expect_create()
            .returning(|_| Err(crate::RentalError::Transaction("fault".to_string())));

        let response = app(repo, customers, movies)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(create_body(Uuid::now_v7(), movie_id))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_create_rental_missing_fields_is_400() {
        let response = app(
            MockRentalRepository::new(),
            MockCustomerRepo::new(),
            MockMovieRepo::new(),
        )
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .header("content-type", "application/json")
                .body(Body::from(json!({"customer_id": Uuid::now_v7()}).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_rental_invalid_id_is_404() {
        let response = app(
            MockRentalRepository::new(),
            MockCustomerRepo::new(),
            MockMovieRepo::new(),
        )
        .oneshot(
            Request::builder()
                .uri("/definitely-not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_rental_returns_deleted_document() {
        let c = customer();
        let m = movie(2);
        let rental = crate::Rental::new(
            &c,
            &m,
            CreateRental {
                customer_id: c.id,
                movie_id: m.id,
                date_out: Utc::now(),
                date_returned: None,
                rental_fee: None,
            },
        );
        let rental_id = rental.id;

        let mut repo = MockRentalRepository::new();
        repo.expect_delete()
            .returning(move |_| Ok(Some(rental.clone())));

        let response = app(repo, MockCustomerRepo::new(), MockMovieRepo::new())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", rental_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let deleted: Rental = json_body(response.into_body()).await;
        assert_eq!(deleted.id, rental_id);
    }

    #[tokio::test]
    async fn test_delete_rental_twice_is_404() {
        let mut repo = MockRentalRepository::new();
        repo.expect_delete().returning(|_| Ok(None));

        let response = app(repo, MockCustomerRepo::new(), MockMovieRepo::new())
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
