use std::sync::atomic::{AtomicUsize, Ordering};

use storefront_core::{Entity, ProductId};
use storefront_products::Product;

use crate::error::FetchError;
use crate::repository::ProductRepository;

/// In-memory catalog for tests/dev.
///
/// Can be switched to behave like an unreachable API. Counts fetches so
/// callers can check the one-fetch-per-view rule.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
    unreachable: bool,
    fetches: AtomicUsize,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            unreachable: false,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Every fetch fails with `FetchError::Network`.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn begin_fetch(&self) -> Result<(), FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.unreachable {
            return Err(FetchError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, FetchError> {
        self.begin_fetch()?;
        Ok(self.products.clone())
    }

    async fn fetch_product_by_id(&self, id: &ProductId) -> Result<Product, FetchError> {
        self.begin_fetch()?;
        self.products
            .iter()
            .find(|p| p.has_id(id))
            .cloned()
            .ok_or_else(|| FetchError::NotFound(id.clone()))
    }
}
