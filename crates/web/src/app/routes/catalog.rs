//! HTML views: product list and product detail.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse},
};

use storefront_client::{load_detail, load_list_view};
use storefront_core::ProductId;
use storefront_products::{DetailState, SortKey};

use crate::app::dto::{self, ListQuery};
use crate::app::errors;
use crate::app::routes::common;
use crate::app::services::AppServices;

/// `GET /`: one catalog fetch, then filter/search/sort/paginate in memory.
///
/// Bad `sort`/`page` values are ignored rather than rejected; an out-of-range
/// page leaves page 1 displayed.
pub async fn list_page(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<ListQuery>,
) -> axum::response::Response {
    let mut view = load_list_view(services.repository.as_ref(), services.page_size).await;

    let sort = common::parse_sort(&q).unwrap_or_else(|e| {
        tracing::debug!(error = %e, "ignoring sort parameter");
        SortKey::None
    });
    view.set_params(common::view_params(&q, sort));

    let change = match common::parse_page(&q) {
        Ok(Some(k)) => {
            let change = view.change_page(k);
            tracing::debug!(requested = k, ?change, "page change");
            Some(change)
        }
        Ok(None) => None,
        Err(e) => {
            tracing::debug!(error = %e, "ignoring page parameter");
            None
        }
    };

    let ctx = dto::ListPageContext::from_view(&view, change);
    match services.renderer.render("list.html", &ctx) {
        Ok(html) => Html(html).into_response(),
        Err(e) => errors::render_error_to_response(e),
    }
}

/// `GET /products/:id`: one product fetch; unknown ids get a 404 page.
pub async fn product_page(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let state = match id.parse::<ProductId>() {
        Ok(product_id) => load_detail(services.repository.as_ref(), &product_id).await,
        Err(_) => DetailState::loading().settle(None),
    };

    let rendered = match state.product() {
        Some(product) => {
            let ctx = dto::DetailPageContext {
                product: dto::ProductDetail::from(product),
            };
            services
                .renderer
                .render("detail.html", &ctx)
                .map(|html| (StatusCode::OK, html))
        }
        None => services
            .renderer
            .render("not_found.html", &dto::NotFoundContext { id })
            .map(|html| (StatusCode::NOT_FOUND, html)),
    };

    match rendered {
        Ok((status, html)) => (status, Html(html)).into_response(),
        Err(e) => errors::render_error_to_response(e),
    }
}
