//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Products API",
        version = "0.1.0",
        description = "Read-only product lookup API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8081", description = "Local development server")
    ),
    nest(
        (path = "/v1/products", api = domain_products::ApiDoc)
    ),
    tags(
        (name = "Products", description = "Product lookup endpoints")
    )
)]
pub struct ApiDoc;
