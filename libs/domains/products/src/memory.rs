//! In-memory implementation of ProductRepository

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Identifiers of the demo catalogue.
pub const DEMO_PRODUCT_IDS: [&str; 5] = [
    "1fafb319-67d9-4cc3-9182-a1099c0919cb",
    "9023995c-72af-4170-b449-482ec5df146b",
    "1d1c3508-107d-469e-a2ac-875dc1533240",
    "193201ef-e120-4f38-9259-04557b04d34a",
    "862f3850-bf60-49ca-a003-5a20dfa96913",
];

pub const DEMO_NAMES: [&str; 5] = ["Laptop", "Smartphone", "Tablet", "Smartwatch", "Headphones"];

pub const DEMO_DESCRIPTIONS: [&str; 5] = [
    "High-end device",
    "Budget-friendly",
    "Latest model",
    "Lightweight and portable",
    "Top performance",
];

/// Demo prices are drawn uniformly from `[MIN_DEMO_PRICE, MAX_DEMO_PRICE)`.
pub const MIN_DEMO_PRICE: f64 = 50.0;
pub const MAX_DEMO_PRICE: f64 = 2000.0;

/// Immutable product catalogue held in a hash map.
///
/// Built once, then only read, so it can be shared across request tasks
/// without locking.
#[derive(Debug, Clone)]
pub struct InMemoryProductRepository {
    products: HashMap<String, Product>,
}

impl InMemoryProductRepository {
    /// Build a repository from an explicit dataset.
    ///
    /// Every record must pass validation and identifiers must be unique.
    pub fn new<I>(products: I) -> ProductResult<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut map = HashMap::new();

        for product in products {
            product
                .validate()
                .map_err(|e| ProductError::InvalidProduct(format!("{}: {}", product.id, e)))?;

            match map.entry(product.id.clone()) {
                Entry::Occupied(_) => return Err(ProductError::DuplicateId(product.id)),
                Entry::Vacant(slot) => {
                    slot.insert(product);
                }
            }
        }

        Ok(Self { products: map })
    }

    /// Build the five-item demo catalogue. The same seed always produces
    /// the same names, descriptions and prices.
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let products = DEMO_PRODUCT_IDS
            .iter()
            .map(|id| {
                let name = DEMO_NAMES[rng.random_range(0..DEMO_NAMES.len())];
                let description = DEMO_DESCRIPTIONS[rng.random_range(0..DEMO_DESCRIPTIONS.len())];
                let price = rng.random_range(MIN_DEMO_PRICE..MAX_DEMO_PRICE);
                (id.to_string(), Product::new(*id, name, description, price))
            })
            .collect();

        Self { products }
    }

    /// Demo catalogue from a freshly drawn seed. Returns the seed so callers
    /// can log it and reproduce the dataset with [`seeded`](Self::seeded).
    pub fn demo() -> (Self, u64) {
        let seed = rand::rng().random::<u64>();
        (Self::seeded(seed), seed)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products.contains_key(id)
    }

    fn lookup(&self, id: &str) -> ProductResult<Product> {
        self.products
            .get(id)
            .cloned()
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn get_by_id(&self, id: &str) -> ProductResult<Product> {
        self.lookup(id)
    }

    async fn get_many(&self, ids: &[String]) -> ProductResult<Vec<Product>> {
        ids.iter().map(|id| self.lookup(id)).collect()
    }
}
