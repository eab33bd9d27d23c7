//! `storefront-client`
//!
//! **Responsibility:** read-only access to the remote product catalog.
//!
//! The remote API is the authority; this crate fetches, decodes and validates
//! products and turns fetch outcomes into view state. Nothing is cached.

pub mod config;
pub mod error;
pub mod http;
pub mod in_memory;
pub mod loader;
pub mod repository;

pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::FetchError;
pub use http::HttpProductRepository;
pub use in_memory::InMemoryProductRepository;
pub use loader::{load_detail, load_list_view};
pub use repository::ProductRepository;
