//! JSON API over the same derived views as the HTML pages.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use storefront_client::{load_detail, load_list_view};
use storefront_core::ProductId;
use storefront_products::DetailState;

use crate::app::dto::{self, ListQuery};
use crate::app::errors;
use crate::app::routes::common;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/:id", get(get_product))
}

/// Unlike the HTML view, malformed `sort`/`page` values are a 400 here.
/// A failed catalog fetch is still a 200 with `load_failed: true`.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<ListQuery>,
) -> axum::response::Response {
    let sort = match common::parse_sort(&q) {
        Ok(s) => s,
        Err(e) => return errors::domain_error_to_response("invalid_sort", e),
    };
    let page = match common::parse_page(&q) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response("invalid_page", e),
    };

    let mut view = load_list_view(services.repository.as_ref(), services.page_size).await;
    view.set_params(common::view_params(&q, sort));
    if let Some(k) = page {
        view.change_page(k);
    }

    (StatusCode::OK, Json(dto::ListResponse::from_view(&view))).into_response()
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match id.parse() {
        Ok(v) => v,
        Err(e) => return errors::domain_error_to_response("invalid_id", e),
    };

    match load_detail(services.repository.as_ref(), &product_id).await {
        DetailState::Success(product) => (StatusCode::OK, Json(product)).into_response(),
        _ => errors::json_error(StatusCode::NOT_FOUND, "not_found", "product not found"),
    }
}
