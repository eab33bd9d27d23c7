use serde::{Deserialize, Serialize};

use storefront_core::Entity;
use storefront_products::{ListStatus, ListView, PageChange, Product, SortKey};

// -------------------------
// Request DTOs
// -------------------------

/// List view query string. Every field is optional; missing ones take defaults.
///
/// Values stay raw strings so the HTML view can be lenient about bad input.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
}

// -------------------------
// Template contexts
// -------------------------

#[derive(Debug, Serialize)]
pub struct ProductCard {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCard {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().to_string(),
            title: p.title().to_string(),
            category: p.category().to_string(),
            price: p.price().to_string(),
            image: p.image().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct ListPageContext {
    pub categories: Vec<String>,
    pub category: String,
    pub search: String,
    pub sort: &'static str,
    pub sort_options: Vec<SortOption>,
    /// `failed`, `no_matches` or `results`.
    pub status: &'static str,
    pub items: Vec<ProductCard>,
    pub page: usize,
    pub total_pages: usize,
    pub pages: Vec<usize>,
    pub prev_page: Option<usize>,
    pub next_page: Option<usize>,
    /// Set only when this request moved the view to another page.
    pub scroll_to_top: bool,
}

impl ListPageContext {
    pub fn from_view(view: &ListView, change: Option<PageChange>) -> Self {
        let params = view.params();
        let page = view.page();

        Self {
            categories: view.categories().to_vec(),
            category: params.category().to_string(),
            search: params.search().to_string(),
            sort: params.sort().as_str(),
            sort_options: SortKey::ALL
                .iter()
                .map(|key| SortOption {
                    // The placeholder option submits an empty value.
                    value: if *key == SortKey::None { "" } else { key.as_str() },
                    label: key.label(),
                    selected: *key == params.sort(),
                })
                .collect(),
            status: status_name(view.status()),
            items: page.items.iter().map(|p| ProductCard::from(*p)).collect(),
            page: page.number,
            total_pages: page.total_pages,
            pages: (1..=page.total_pages).collect(),
            prev_page: page.has_previous().then(|| page.number - 1),
            next_page: page.has_next().then(|| page.number + 1),
            scroll_to_top: change.is_some_and(PageChange::scrolls_to_top),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DetailPageContext {
    pub product: ProductDetail,
}

#[derive(Debug, Serialize)]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price: String,
    pub description: String,
    pub image: String,
}

impl From<&Product> for ProductDetail {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().to_string(),
            title: p.title().to_string(),
            category: p.category().to_string(),
            price: p.price().to_string(),
            description: p.description().to_string(),
            image: p.image().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundContext {
    pub id: String,
}

// -------------------------
// JSON responses
// -------------------------

#[derive(Debug, Serialize)]
pub struct ListResponse<'a> {
    pub categories: &'a [String],
    pub category: &'a str,
    pub search: &'a str,
    pub sort: SortKey,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub load_failed: bool,
    pub items: Vec<&'a Product>,
}

impl<'a> ListResponse<'a> {
    pub fn from_view(view: &'a ListView) -> Self {
        let params = view.params();
        let page = view.page();

        Self {
            categories: view.categories(),
            category: params.category(),
            search: params.search(),
            sort: params.sort(),
            page: page.number,
            total_pages: page.total_pages,
            total_items: page.total_items,
            load_failed: view.load_failed(),
            items: page.items,
        }
    }
}

pub fn status_name(status: ListStatus) -> &'static str {
    match status {
        ListStatus::Failed => "failed",
        ListStatus::NoMatches => "no_matches",
        ListStatus::Results => "results",
    }
}
