use axum::{routing::get, Router};

pub mod api;
pub mod catalog;
pub mod common;
pub mod system;

/// Router for the catalog views (HTML) and the JSON API.
pub fn router() -> Router {
    Router::new()
        .route("/", get(catalog::list_page))
        .route("/products/:id", get(catalog::product_page))
        .nest("/api", api::router())
}
