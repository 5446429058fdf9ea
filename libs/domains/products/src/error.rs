use axum_helpers::AppError;
use thiserror::Error;

/// Body text for a failed single-item lookup.
pub const PRODUCT_NOT_FOUND: &str = "product not found";

/// Body text for a batch request whose payload could not be decoded.
pub const INVALID_REQUEST_PAYLOAD: &str = "Invalid request payload";

/// Message used when an internal error is surfaced to a client.
pub const INTERNAL_ERROR: &str = "internal server error";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Duplicate product id: {0}")]
    DuplicateId(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Which lookup produced an error; selects how `NotFound` is worded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Single,
    Batch,
}

impl ProductError {
    /// Render the error as the HTTP response for the given lookup.
    ///
    /// Single lookups answer a miss with a generic message; batch lookups
    /// name the first missing identifier.
    pub fn into_app_error(self, lookup: Lookup) -> AppError {
        match (self, lookup) {
            (ProductError::NotFound(_), Lookup::Single) => {
                AppError::NotFound(PRODUCT_NOT_FOUND.to_string())
            }
            (ProductError::NotFound(id), Lookup::Batch) => {
                AppError::NotFound(format!("{} for id: {}", PRODUCT_NOT_FOUND, id))
            }
            (ProductError::MalformedRequest(detail), _) => {
                tracing::debug!(%detail, "rejecting malformed payload");
                AppError::BadRequest(INVALID_REQUEST_PAYLOAD.to_string())
            }
            (err @ (ProductError::InvalidProduct(_) | ProductError::DuplicateId(_)), _) => {
                tracing::error!(error = %err, "product catalogue error on request path");
                AppError::InternalServerError(INTERNAL_ERROR.to_string())
            }
        }
    }
}
