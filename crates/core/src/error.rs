//! Errors raised by the pure catalog crates.

use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// A product, id or catalog that cannot be accepted as-is.
///
/// Deterministic: the same input always fails the same way. Transport and
/// lookup failures are `storefront_client::FetchError`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A single value is malformed (blank title, negative price, unknown sort key).
    #[error("invalid value: {0}")]
    Validation(String),

    /// A collection-level rule is broken (duplicate product ids).
    #[error("catalog invariant broken: {0}")]
    InvariantViolation(String),

    /// Text that cannot name a product.
    #[error("invalid product id: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
