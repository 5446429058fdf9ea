//! Handler tests for the Products domain
//!
//! Drive the products router, mounted at `/v1/products`, against a seeded
//! in-memory repository and check status codes, headers and exact bodies.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use domain_products::*;
use http_body_util::BodyExt;
use tower::ServiceExt; // For oneshot()

const LAPTOP_ID: &str = "1fafb319-67d9-4cc3-9182-a1099c0919cb";
const PHONE_ID: &str = "9023995c-72af-4170-b449-482ec5df146b";

fn app() -> Router {
    let repository = InMemoryProductRepository::seeded(2024);
    let service = ProductService::new(repository);
    Router::new().nest("/v1/products", handlers::router(service))
}

async fn body_bytes(body: Body) -> Vec<u8> {
    body.collect().await.unwrap().to_bytes().to_vec()
}

async fn body_text(body: Body) -> String {
    String::from_utf8(body_bytes(body).await).unwrap()
}

fn assert_complete(product: &Product) {
    assert!(!product.id.is_empty());
    assert!(!product.name.is_empty());
    assert!(!product.description.is_empty());
    assert!(product.price > 0.0);
}

fn post_multiple(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/v1/products/multiple")
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

#[tokio::test]
async fn test_get_product_valid_id_returns_200() {
    let request = Request::builder()
        .method("GET")
        .uri(format!("/v1/products/{}", LAPTOP_ID))
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let product: Product = serde_json::from_slice(&body_bytes(response.into_body()).await).unwrap();
    assert_eq!(product.id, LAPTOP_ID);
    assert_complete(&product);
}

#[tokio::test]
async fn test_get_product_not_found_returns_404() {
    let request = Request::builder()
        .method("GET")
        .uri("/v1/products/non-existent-id")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );
    assert_eq!(body_text(response.into_body()).await, "product not found\n");
}

#[tokio::test]
async fn test_get_multiple_valid_ids_returns_200_in_order() {
    let body = serde_json::to_vec(&[PHONE_ID, LAPTOP_ID]).unwrap();

    let response = app().oneshot(post_multiple(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );

    let products: Vec<Product> =
        serde_json::from_slice(&body_bytes(response.into_body()).await).unwrap();
    assert_eq!(products.len(), 2, "Expected two products");
    assert_eq!(products[0].id, PHONE_ID);
    assert_eq!(products[1].id, LAPTOP_ID);
    products.iter().for_each(assert_complete);
}

#[tokio::test]
async fn test_get_multiple_without_content_type_is_still_decoded() {
    let request = Request::builder()
        .method("POST")
        .uri("/v1/products/multiple")
        .body(Body::from(format!(r#"["{}"]"#, LAPTOP_ID)))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_get_multiple_empty_body_returns_400() {
    let response = app().oneshot(post_multiple(Body::empty())).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "Invalid request payload\n"
    );
}

#[tokio::test]
async fn test_get_multiple_non_json_body_returns_400() {
    let response = app().oneshot(post_multiple("ids please")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "Invalid request payload\n"
    );
}

#[tokio::test]
async fn test_get_multiple_missing_ids_returns_404_for_first() {
    let body = serde_json::to_vec(&["non-existent-id-1", "non-existent-id-2"]).unwrap();

    let response = app().oneshot(post_multiple(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(response.into_body()).await,
        "product not found for id: non-existent-id-1\n"
    );
}

#[tokio::test]
async fn test_get_multiple_partial_miss_returns_no_products() {
    let body = serde_json::to_vec(&[LAPTOP_ID, "gone", PHONE_ID]).unwrap();

    let response = app().oneshot(post_multiple(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        body_text(response.into_body()).await,
        "product not found for id: gone\n"
    );
}

#[tokio::test]
async fn test_get_multiple_empty_array_returns_empty_array() {
    let response = app().oneshot(post_multiple("[]")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response.into_body()).await, "[]");
}

#[tokio::test]
async fn test_get_multiple_ignores_data_after_the_array() {
    let body = format!(r#"["{}"] junk"#, LAPTOP_ID);

    let response = app().oneshot(post_multiple(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> =
        serde_json::from_slice(&body_bytes(response.into_body()).await).unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id, LAPTOP_ID);
}

#[tokio::test]
async fn test_get_multiple_null_body_returns_empty_array() {
    let response = app().oneshot(post_multiple("null")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response.into_body()).await, "[]");
}

#[tokio::test]
async fn test_get_multiple_oversized_body_returns_400() {
    let padding = "x".repeat(handlers::MAX_BATCH_BODY_BYTES);
    let body = serde_json::to_vec(&[padding]).unwrap();

    let response = app().oneshot(post_multiple(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_text(response.into_body()).await,
        "Invalid request payload\n"
    );
}

#[tokio::test]
async fn test_get_on_multiple_is_a_single_lookup() {
    let request = Request::builder()
        .method("GET")
        .uri("/v1/products/multiple")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response.into_body()).await, "product not found\n");
}

#[tokio::test]
async fn test_same_seed_serves_same_product() {
    let fetch = || async {
        let request = Request::builder()
            .uri(format!("/v1/products/{}", PHONE_ID))
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        serde_json::from_slice::<Product>(&body_bytes(response.into_body()).await).unwrap()
    };

    assert_eq!(fetch().await, fetch().await);
}
