//! Products Domain
//!
//! Read-only product lookups, layered as handlers → service → repository.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, error rendering
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Delegation to the repository trait
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product record
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let repository = InMemoryProductRepository::seeded(42);
//! let service = ProductService::new(repository);
//!
//! let router = axum::Router::new().nest("/v1/products", handlers::router(service));
//! # let _: axum::Router = router;
//! ```

pub mod error;
pub mod handlers;
pub mod memory;
pub mod models;
pub mod repository;
pub mod service;

pub use error::{Lookup, ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use memory::{InMemoryProductRepository, DEMO_PRODUCT_IDS};
pub use models::Product;
pub use repository::ProductRepository;
pub use service::ProductService;
