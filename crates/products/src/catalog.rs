use std::collections::HashSet;
use std::sync::Arc;

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

use crate::product::Product;

/// Sentinel at the head of the category universe meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// The product collection backing one view.
///
/// Immutable once built; cloning shares the underlying products. The category
/// universe is derived here, so it only changes when the collection does.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<[Product]>,
    categories: Arc<[String]>,
}

impl Catalog {
    /// Build a catalog from fetched products, keeping fetch order.
    ///
    /// Fails if two products share an id.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen: HashSet<&ProductId> = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(p.id()) {
                return Err(DomainError::invariant(format!("duplicate product id {}", p.id())));
            }
        }

        let categories = category_universe(&products);
        Ok(Self {
            products: products.into(),
            categories: categories.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            products: Arc::from(Vec::new()),
            categories: Arc::from(vec![ALL_CATEGORIES.to_string()]),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// `"All"` followed by each distinct category in first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

/// Distinct categories of `products` (first-seen order), prefixed with `"All"`.
pub fn category_universe(products: &[Product]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = vec![ALL_CATEGORIES.to_string()];
    for p in products {
        if seen.insert(p.category()) {
            out.push(p.category().to_string());
        }
    }
    out
}
