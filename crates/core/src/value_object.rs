//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Prices and view parameters are value objects, products
//! are entities (see [`crate::Entity`]).

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one from the old (e.g. `params.with_sort(..)`), which is how
/// the storefront keeps derived views free of hidden state.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Price(f64);
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price(9.5), Price(9.5));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
