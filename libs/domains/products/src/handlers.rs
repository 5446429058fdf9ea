//! HTTP handlers for the Products API

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, DefaultBodyLimit, Path, State},
    routing::{get, post},
    Json, Router,
};
use axum_helpers::AppError;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{Lookup, ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;
use crate::service::ProductService;

/// OpenAPI documentation for Products API
#[derive(OpenApi)]
#[openapi(
    paths(get_product, get_products),
    components(schemas(Product)),
    tags(
        (name = "Products", description = "Product lookup endpoints")
    )
)]
pub struct ApiDoc;

/// Largest batch request body accepted, in bytes. Larger bodies are rejected
/// as malformed.
pub const MAX_BATCH_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Create the products router. Paths are relative to the mount point.
pub fn router<R: ProductRepository + 'static>(service: ProductService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/multiple",
            post(get_products).layer(DefaultBodyLimit::max(MAX_BATCH_BODY_BYTES)),
        )
        .route("/{id}", get(get_product))
        .with_state(shared_service)
}

/// Decode a batch request body: a JSON array of identifier strings.
///
/// The body is decoded whatever the `Content-Type`. Only the leading JSON
/// value is read; anything after it is ignored. `null` is an empty list.
/// An empty body, or a leading value that is not an array of strings, is
/// malformed.
fn parse_id_list(body: &[u8]) -> ProductResult<Vec<String>> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<Vec<String>>>();

    match values.next() {
        Some(Ok(ids)) => Ok(ids.unwrap_or_default()),
        Some(Err(e)) => Err(ProductError::MalformedRequest(e.to_string())),
        None => Err(ProductError::MalformedRequest("empty body".to_string())),
    }
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "Product not found", body = String, content_type = "text/plain")
    )
)]
async fn get_product<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Product>, AppError> {
    let product = service
        .get_product(&id)
        .await
        .map_err(|e| e.into_app_error(Lookup::Single))?;
    Ok(Json(product))
}

/// Get several products by ID, in request order
#[utoipa::path(
    post,
    path = "/multiple",
    tag = "Products",
    request_body(content = Vec<String>, description = "Product IDs", content_type = "application/json"),
    responses(
        (status = 200, description = "Products found, same order as the request", body = Vec<Product>),
        (status = 400, description = "Body is not a JSON array of strings", body = String, content_type = "text/plain"),
        (status = 404, description = "An ID was not found; the first missing one is reported", body = String, content_type = "text/plain")
    )
)]
async fn get_products<R: ProductRepository>(
    State(service): State<Arc<ProductService<R>>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Vec<Product>>, AppError> {
    let ids = body
        .map_err(|e| ProductError::MalformedRequest(e.body_text()))
        .and_then(|bytes| parse_id_list(&bytes))
        .map_err(|e| e.into_app_error(Lookup::Batch))?;

    let products = service
        .get_products(&ids)
        .await
        .map_err(|e| e.into_app_error(Lookup::Batch))?;
    Ok(Json(products))
}
