use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Product record served by the lookup API.
///
/// Immutable once stored: repositories hand out clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    /// Opaque identifier, unique within a repository
    #[validate(length(min = 1))]
    pub id: String,
    /// Display name
    #[validate(length(min = 1))]
    pub name: String,
    /// Display description
    #[validate(length(min = 1))]
    pub description: String,
    /// Price, strictly positive
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
        }
    }
}
