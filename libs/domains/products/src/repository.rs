use async_trait::async_trait;

use crate::error::ProductResult;
use crate::models::Product;

/// Read-only access to a product catalogue.
///
/// Implementations own their dataset and hand out clones. Both lookups fail
/// with `ProductError::NotFound` carrying the identifier that was missing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID
    async fn get_by_id(&self, id: &str) -> ProductResult<Product>;

    /// Get one product per ID, in input order.
    ///
    /// Stops at the first missing ID; no partial result is returned.
    async fn get_many(&self, ids: &[String]) -> ProductResult<Vec<Product>>;
}
