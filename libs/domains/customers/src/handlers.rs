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

use crate::error::CustomerResult;
use crate::models::{CreateCustomer, Customer, UpdateCustomer};
use crate::repository::CustomerRepository;
use crate::service::CustomerService;

/// OpenAPI documentation for the Customers API
#[derive(OpenApi)]
#[openapi(
    paths(
        list_customers,
        create_customer,
        get_customer,
        update_customer,
        delete_customer
    ),
    components(
        schemas(Customer, CreateCustomer, UpdateCustomer),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            UnauthorizedResponse,
            ForbiddenResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Customers", description = "Customer management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the customers router.
///
/// Reads are public; create/update require a valid token and delete
/// additionally requires the admin flag.
pub fn router<R: CustomerRepository + 'static>(
    service: CustomerService<R>,
    auth: JwtAuth,
) -> Router {
    let service = Arc::new(service);

    let public = Router::new()
        .route("/", get(list_customers))
        .route("/{id}", get(get_customer));

    let protected = Router::new()
        .route("/", post(create_customer))
        .route("/{id}", put(update_customer))
        .route_layer(middleware::from_fn_with_state(auth.clone(), require_auth));

    let admin = Router::new()
        .route("/{id}", delete(delete_customer))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(auth, require_auth));

    public.merge(protected).merge(admin).with_state(service)
}

/// List all customers
#[utoipa::path(
    get,
    path = "",
    tag = "Customers",
    responses(
        (status = 200, description = "List of customers, sorted by name", body = Vec<Customer>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_customers<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
) -> CustomerResult<Json<Vec<Customer>>> {
    let customers = service.list_customers().await?;
    Ok(Json(customers))
}

/// Create a new customer
#[utoipa::path(
    post,
    path = "",
    tag = "Customers",
    request_body = CreateCustomer,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateCustomer>,
) -> CustomerResult<impl IntoResponse> {
    let customer = service.create_customer(input).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

/// Get a customer by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer found", body = Customer),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> CustomerResult<Json<Customer>> {
    let customer = service.get_customer(id).await?;
    Ok(Json(customer))
}

/// Update a customer
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomer,
    responses(
        (status = 200, description = "Customer updated", body = Customer),
        (status = 400, response = BadRequestValidationResponse),
        (status = 401, response = UnauthorizedResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateCustomer>,
) -> CustomerResult<Json<Customer>> {
    let customer = service.update_customer(id, input).await?;
    Ok(Json(customer))
}

/// Delete a customer (admin only)
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Customers",
    params(
        ("id" = Uuid, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 401, response = UnauthorizedResponse),
        (status = 403, response = ForbiddenResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_customer<R: CustomerRepository>(
    State(service): State<Arc<CustomerService<R>>>,
    UuidPath(id): UuidPath,
) -> CustomerResult<impl IntoResponse> {
    service.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCustomerRepository;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;
    use uuid::Uuid;

    fn app(repo: MockCustomerRepository) -> Router {
        router(CustomerService::new(repo), JwtAuth::new("test-secret"))
    }

    fn token() -> String {
        JwtAuth::new("test-secret")
            .encode_token(Uuid::now_v7(), "tester", false)
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_customer_returns_201() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_create().returning(|customer| Ok(customer));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .header("authorization", format!("Bearer {}", token()))
                    .body(Body::from(
                        json!({"name": "Jamie Doe", "phone": "555-0101"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let customer: Customer = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(customer.phone, "555-0101");
        assert!(!customer.is_gold);
    }

    #[tokio::test]
    async fn test_create_customer_without_token_is_401() {
        let response = app(MockCustomerRepository::new())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header("content-type", "application/json")
                    .body(Body::from(
                        json!({"name": "Jamie Doe", "phone": "555-0101"}).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_get_customer_missing_is_404() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let response = app(repo)
            .oneshot(
                Request::builder()
                    .uri(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
