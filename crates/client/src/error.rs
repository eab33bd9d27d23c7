use storefront_core::ProductId;

/// Why a fetch against the catalog failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// Transport failure, or an unexpected status on the list fetch.
    #[error("network error: {0}")]
    Network(String),
    /// The catalog does not know the requested product.
    #[error("product {0} not found")]
    NotFound(ProductId),
    /// The response body is not a valid product (collection).
    #[error("decode error: {0}")]
    Decode(String),
}

impl FetchError {
    pub(crate) fn network(e: impl core::fmt::Display) -> Self {
        Self::Network(e.to_string())
    }

    pub(crate) fn decode(e: impl core::fmt::Display) -> Self {
        Self::Decode(e.to_string())
    }
}
