//! `storefront-core`: identifiers, errors and the two modelling traits shared
//! by every storefront crate. No IO.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use value_object::ValueObject;
