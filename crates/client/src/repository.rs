use std::sync::Arc;

use storefront_core::ProductId;
use storefront_products::Product;

use crate::error::FetchError;

/// Read-only access to the product catalog.
///
/// Implementations perform exactly one remote call per method and keep no
/// state between calls.
#[async_trait::async_trait]
pub trait ProductRepository: Send + Sync {
    /// The whole catalog, in the order the source returns it (possibly empty).
    async fn fetch_all_products(&self) -> Result<Vec<Product>, FetchError>;

    /// A single product. `FetchError::NotFound` if the source does not know `id`.
    async fn fetch_product_by_id(&self, id: &ProductId) -> Result<Product, FetchError>;
}

#[async_trait::async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn fetch_all_products(&self) -> Result<Vec<Product>, FetchError> {
        (**self).fetch_all_products().await
    }

    async fn fetch_product_by_id(&self, id: &ProductId) -> Result<Product, FetchError> {
        (**self).fetch_product_by_id(id).await
    }
}
