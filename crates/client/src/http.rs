//! HTTP implementation of [`ProductRepository`] over `reqwest`.

use storefront_core::{Entity, ProductId};
use storefront_products::Product;

use crate::config::ClientConfig;
use crate::error::FetchError;
use crate::repository::ProductRepository;

/// Fetches products from a FakeStore-shaped REST API.
///
/// `GET {base}/products` for the catalog, `GET {base}/products/{id}` for one
/// product. Timeouts are whatever the transport defaults to.
#[derive(Debug, Clone)]
pub struct HttpProductRepository {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpProductRepository {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait::async_trait]
impl ProductRepository for HttpProductRepository {
    async fn fetch_all_products(&self) -> Result<Vec<Product>, FetchError> {
        let url = self.config.products_url();
        tracing::debug!(%url, "fetching catalog");

        let resp = self.client.get(&url).send().await.map_err(FetchError::network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Network(format!("GET {url} returned {status}")));
        }

        let body = resp.bytes().await.map_err(FetchError::network)?;
        serde_json::from_slice(&body).map_err(FetchError::decode)
    }

    async fn fetch_product_by_id(&self, id: &ProductId) -> Result<Product, FetchError> {
        let url = self.config.product_url(id);
        tracing::debug!(%url, "fetching product");

        let resp = self.client.get(&url).send().await.map_err(FetchError::network)?;

        if !resp.status().is_success() {
            return Err(FetchError::NotFound(id.clone()));
        }

        let body = resp.bytes().await.map_err(FetchError::network)?;

        // The public catalog answers unknown ids with 200 and an empty body.
        let trimmed = body.trim_ascii();
        if trimmed.is_empty() || trimmed == b"null" {
            return Err(FetchError::NotFound(id.clone()));
        }

        let product: Product = serde_json::from_slice(trimmed).map_err(FetchError::decode)?;

        // Only an exact id match resolves the request ("01" is not "1").
        if !product.has_id(id) {
            tracing::debug!(requested = %id, returned = %product.id(), "catalog answered with another product");
            return Err(FetchError::NotFound(id.clone()));
        }
        Ok(product)
    }
}
