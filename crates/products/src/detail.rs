use crate::product::Product;

/// Detail lookup state for one navigation.
///
/// `Loading` settles exactly once into `Success` or `NotFound`; settled
/// states never change again. A fresh navigation starts a fresh `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Loading,
    Success(Product),
    NotFound,
}

impl DetailState {
    pub fn loading() -> Self {
        Self::Loading
    }

    /// Settle with the outcome of the fetch. No-op once settled.
    pub fn settle(self, found: Option<Product>) -> Self {
        match self {
            DetailState::Loading => match found {
                Some(product) => DetailState::Success(product),
                None => DetailState::NotFound,
            },
            settled => settled,
        }
    }

    pub fn product(&self) -> Option<&Product> {
        match self {
            DetailState::Success(p) => Some(p),
            _ => None,
        }
    }
}
