//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rental API",
        version = "0.1.0",
        description = "MongoDB-based REST API for a video rental store",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/genres", api = domain_genres::ApiDoc),
        (path = "/api/movies", api = domain_movies::ApiDoc),
        (path = "/api/customers", api = domain_customers::ApiDoc),
        (path = "/api/rentals", api = domain_rentals::ApiDoc),
        (path = "/api/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Genres", description = "Genre management endpoints"),
        (name = "Movies", description = "Movie catalogue endpoints"),
        (name = "Customers", description = "Customer management endpoints"),
        (name = "Rentals", description = "Rental endpoints, including the stock-decrementing create"),
        (name = "Users", description = "User management endpoints")
    )
)]
pub struct ApiDoc;
