//! Products catalog module.
//!
//! Catalog model and the derived-view logic over it (filter, search, sort,
//! paginate, detail lookup), implemented purely as deterministic domain logic
//! (no IO, no HTTP, no storage).

pub mod catalog;
pub mod collation;
pub mod detail;
pub mod pagination;
pub mod product;
pub mod query;
pub mod view;

pub use catalog::{ALL_CATEGORIES, Catalog, category_universe};
pub use detail::DetailState;
pub use pagination::{DEFAULT_PAGE_SIZE, PageChange, Paginator};
pub use product::{Price, Product, ProductRecord};
pub use query::{SortKey, ViewParams};
pub use view::{ListStatus, ListView, Page};
