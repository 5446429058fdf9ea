//! Products API - REST server for product lookups

use axum::Router;
use axum_helpers::server::{create_production_app, create_router, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

mod api;
mod config;
mod openapi;
mod state;

use config::Config;
use state::AppState;

/// Bound on post-signal cleanup.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    let app = build_app(&state)?;

    info!(
        "Starting {} v{} on port {}",
        state.config.app.name, state.config.app.version, state.config.server.port
    );

    // The catalogue lives in memory; nothing to release on shutdown.
    create_production_app(app, &state.config.server, SHUTDOWN_TIMEOUT, async {})
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}

/// REST routes plus docs, health check and shared middleware.
fn build_app(state: &AppState) -> std::io::Result<Router> {
    let router = create_router::<openapi::ApiDoc>(api::routes(state))?;
    Ok(router.merge(health_router(state.config.app)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::server::ServerConfig;
    use domain_products::{Product, DEMO_PRODUCT_IDS};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let config = Config {
            app: core_config::app_info!(),
            server: ServerConfig::default(),
            environment: config::Environment::Development,
            products_seed: Some(7),
        };
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            build_app(&AppState::new(config)).unwrap()
        })
    }

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn test_products_are_served_under_v1() {
        let (status, body) = get(&format!("/v1/products/{}", DEMO_PRODUCT_IDS[2])).await;

        assert_eq!(status, StatusCode::OK);
        let product: Product = serde_json::from_slice(&body).unwrap();
        assert_eq!(product.id, DEMO_PRODUCT_IDS[2]);
    }

    #[tokio::test]
    async fn test_health_reports_binary_info() {
        let (status, body) = get("/health").await;

        assert_eq!(status, StatusCode::OK);
        let health: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(health["name"], "products_api");
    }

    #[tokio::test]
    async fn test_openapi_lists_product_paths() {
        let (status, body) = get("/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["paths"]["/v1/products/{id}"].is_object());
        assert!(doc["paths"]["/v1/products/multiple"].is_object());
    }

    #[tokio::test]
    async fn test_unknown_route_is_plain_text_404() {
        let (status, body) = get("/v2/products").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, b"not found\n");
    }
}
