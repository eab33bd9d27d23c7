use storefront_core::DomainError;
use storefront_products::{ALL_CATEGORIES, SortKey, ViewParams};

use crate::app::dto::ListQuery;

/// Parse the `sort` parameter; missing means no sort.
pub fn parse_sort(q: &ListQuery) -> Result<SortKey, DomainError> {
    q.sort
        .as_deref()
        .map(str::parse::<SortKey>)
        .transpose()
        .map(Option::unwrap_or_default)
}

/// Parse the `page` parameter; missing or blank means no page change.
pub fn parse_page(q: &ListQuery) -> Result<Option<usize>, DomainError> {
    match q.page.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<usize>()
            .map(Some)
            .map_err(|_| DomainError::validation(format!("page must be a positive integer, got {raw:?}"))),
    }
}

pub fn view_params(q: &ListQuery, sort: SortKey) -> ViewParams {
    let category = q
        .category
        .as_deref()
        .filter(|c| !c.is_empty())
        .unwrap_or(ALL_CATEGORIES);
    ViewParams::new(category, q.search.clone().unwrap_or_default(), sort)
}
