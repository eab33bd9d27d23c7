//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: shared, read-only request dependencies
//! - `routes/`: HTTP routes + handlers (HTML views, JSON API, system)
//! - `dto.rs`: template contexts and JSON response shapes
//! - `render.rs`: minijinja templates
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use core::num::NonZeroUsize;
use tower::ServiceBuilder;

use storefront_client::ProductRepository;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod render;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
pub fn build_app(
    repository: Arc<dyn ProductRepository>,
    page_size: NonZeroUsize,
) -> anyhow::Result<Router> {
    let renderer = render::Renderer::new()?;
    let services = Arc::new(services::AppServices {
        repository,
        renderer,
        page_size,
    });

    Ok(Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests))))
}
