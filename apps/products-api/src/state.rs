//! Application state management

use domain_products::{InMemoryProductRepository, ProductService};
use tracing::info;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub products: ProductService<InMemoryProductRepository>,
}

impl AppState {
    /// Build the demo catalogue, seeded from config when a seed is given.
    pub fn new(config: Config) -> Self {
        let (repository, seed) = match config.products_seed {
            Some(seed) => (InMemoryProductRepository::seeded(seed), seed),
            None => InMemoryProductRepository::demo(),
        };
        info!(seed, products = repository.len(), "Loaded demo product catalogue");

        Self {
            config,
            products: ProductService::new(repository),
        }
    }
}
