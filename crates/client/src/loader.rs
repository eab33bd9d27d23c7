//! Fetch outcomes → view state.
//!
//! Failures stop here: the list view gets an error flag, the detail view a
//! not-found state. Neither propagates an error to the caller.

use core::num::NonZeroUsize;

use storefront_core::ProductId;
use storefront_products::{Catalog, DetailState, ListView};

use crate::error::FetchError;
use crate::repository::ProductRepository;

/// Fetch the catalog once and build a list view at default parameters.
pub async fn load_list_view<R>(repo: &R, page_size: NonZeroUsize) -> ListView
where
    R: ProductRepository + ?Sized,
{
    let fetched = repo
        .fetch_all_products()
        .await
        .and_then(|products| Catalog::new(products).map_err(FetchError::decode));

    match fetched {
        Ok(catalog) => {
            tracing::debug!(products = catalog.len(), "catalog loaded");
            ListView::loaded(catalog, page_size)
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load products");
            ListView::failed(page_size)
        }
    }
}

/// Resolve one product for a detail navigation.
pub async fn load_detail<R>(repo: &R, id: &ProductId) -> DetailState
where
    R: ProductRepository + ?Sized,
{
    let state = DetailState::loading();
    match repo.fetch_product_by_id(id).await {
        Ok(product) => state.settle(Some(product)),
        Err(FetchError::NotFound(_)) => {
            tracing::debug!(%id, "product not found");
            state.settle(None)
        }
        Err(e) => {
            tracing::warn!(%id, error = %e, "product lookup failed");
            state.settle(None)
        }
    }
}
