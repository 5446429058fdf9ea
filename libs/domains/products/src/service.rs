//! Product Service - application layer between handlers and storage

use std::sync::Arc;
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Product lookups, delegated to a [`ProductRepository`].
///
/// Results and errors are passed through unchanged; translating them for a
/// transport is the caller's job.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: &str) -> ProductResult<Product> {
        self.repository.get_by_id(id).await
    }

    /// Get several products, in request order
    #[instrument(skip(self), fields(count = ids.len()))]
    pub async fn get_products(&self, ids: &[String]) -> ProductResult<Vec<Product>> {
        self.repository.get_many(ids).await
    }
}

impl<R: ProductRepository> Clone for ProductService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
