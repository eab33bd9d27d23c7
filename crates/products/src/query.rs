//! Query pipeline: category filter → title search → sort.
//!
//! Pure functions over a borrowed collection. The input is never reordered;
//! results are fresh vectors of references into it.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, ValueObject};

use crate::catalog::ALL_CATEGORIES;
use crate::collation::compare_titles;
use crate::product::Product;

/// Sort order applied as the last pipeline step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Keep fetch order.
    #[default]
    None,
    PriceAsc,
    PriceDesc,
    TitleAsc,
    TitleDesc,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::None,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::TitleAsc,
        SortKey::TitleDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::TitleAsc => "title-asc",
            SortKey::TitleDesc => "title-desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::None => "Sort by",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::TitleAsc => "Title: A to Z",
            SortKey::TitleDesc => "Title: Z to A",
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            // The empty string is the "Sort by" placeholder.
            "" | "none" => Ok(SortKey::None),
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "title-asc" => Ok(SortKey::TitleAsc),
            "title-desc" => Ok(SortKey::TitleDesc),
            other => Err(DomainError::validation(format!(
                "unknown sort key {other:?}; expected one of: none, price-asc, price-desc, title-asc, title-desc"
            ))),
        }
    }
}

/// The user-controlled inputs of the pipeline.
///
/// Immutable: each `with_*` returns a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewParams {
    category: String,
    search: String,
    sort: SortKey,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            search: String::new(),
            sort: SortKey::None,
        }
    }
}

impl ValueObject for ViewParams {}

impl ViewParams {
    pub fn new(category: impl Into<String>, search: impl Into<String>, sort: SortKey) -> Self {
        Self {
            category: category.into(),
            search: search.into(),
            sort,
        }
    }

    pub fn with_category(&self, category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            ..self.clone()
        }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            ..self.clone()
        }
    }

    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            ..self.clone()
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }
}

/// Run the full pipeline over `products`.
pub fn run<'a>(products: &'a [Product], params: &ViewParams) -> Vec<&'a Product> {
    matching_positions(products, params)
        .into_iter()
        .map(|i| &products[i])
        .collect()
}

/// The pipeline output as positions into `products`, in display order.
pub fn matching_positions(products: &[Product], params: &ViewParams) -> Vec<usize> {
    let needle = search_needle(params.search());
    let mut positions: Vec<usize> = products
        .iter()
        .enumerate()
        .filter(|(_, p)| in_category(p, params.category()))
        .filter(|(_, p)| needle.as_deref().is_none_or(|n| title_contains(p, n)))
        .map(|(i, _)| i)
        .collect();
    if params.sort() != SortKey::None {
        positions.sort_by(|&a, &b| compare(&products[a], &products[b], params.sort()));
    }
    positions
}

/// Keep products whose category equals `category` exactly. `"All"` keeps everything.
pub fn filter_category<'a>(products: Vec<&'a Product>, category: &str) -> Vec<&'a Product> {
    products
        .into_iter()
        .filter(|p| in_category(p, category))
        .collect()
}

/// Keep products whose title contains `search`, ignoring case.
///
/// Whitespace-only input disables the filter. Otherwise the text is matched
/// as typed, surrounding spaces included.
pub fn filter_search<'a>(products: Vec<&'a Product>, search: &str) -> Vec<&'a Product> {
    let Some(needle) = search_needle(search) else {
        return products;
    };
    products
        .into_iter()
        .filter(|p| title_contains(p, &needle))
        .collect()
}

/// Stable in-place sort; ties keep their current relative order in both directions.
pub fn sort_products(products: &mut [&Product], sort: SortKey) {
    if sort != SortKey::None {
        products.sort_by(|a, b| compare(a, b, sort));
    }
}

fn in_category(product: &Product, category: &str) -> bool {
    category == ALL_CATEGORIES || product.category() == category
}

/// Lowercased search text, or `None` when it is blank.
fn search_needle(search: &str) -> Option<String> {
    (!search.trim().is_empty()).then(|| search.to_lowercase())
}

fn title_contains(product: &Product, needle: &str) -> bool {
    product.title().to_lowercase().contains(needle)
}

fn compare(a: &Product, b: &Product, sort: SortKey) -> Ordering {
    match sort {
        SortKey::None => Ordering::Equal,
        SortKey::PriceAsc => a.price().cmp_numeric(&b.price()),
        SortKey::PriceDesc => b.price().cmp_numeric(&a.price()),
        SortKey::TitleAsc => compare_titles(a.title(), b.title()),
        SortKey::TitleDesc => compare_titles(b.title(), a.title()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductRecord;
    use storefront_core::{Entity, ProductId};

    fn product(id: u64, title: &str, price: f64, category: &str) -> Product {
        Product::try_from(ProductRecord {
            id: ProductId::from(id),
            title: title.to_string(),
            price,
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
        })
        .unwrap()
    }

    fn fixture() -> Vec<Product> {
        vec![
            product(1, "Fjallraven Backpack", 109.95, "men's clothing"),
            product(2, "Mens Casual T-Shirt", 22.3, "men's clothing"),
            product(3, "Gold Chain Bracelet", 695.0, "jewelery"),
            product(4, "WD 2TB Drive", 64.0, "electronics"),
            product(5, "mens cotton jacket", 55.99, "men's clothing"),
            product(6, "Silver Ring", 22.3, "jewelery"),
        ]
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id().to_string()).collect()
    }

    #[test]
    fn default_params_return_collection_unchanged() {
        let products = fixture();
        let out = run(&products, &ViewParams::default());
        assert_eq!(ids(&out), vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn category_filter_is_exact_and_case_sensitive() {
        let products = fixture();
        let out = run(&products, &ViewParams::default().with_category("jewelery"));
        assert_eq!(ids(&out), vec!["3", "6"]);

        let out = run(&products, &ViewParams::default().with_category("Jewelery"));
        assert!(out.is_empty());
    }

    #[test]
    fn search_ignores_case() {
        let products = fixture();
        let out = run(&products, &ViewParams::default().with_search("MENS"));
        assert_eq!(ids(&out), vec!["2", "5"]);
    }

    #[test]
    fn whitespace_search_is_a_no_op() {
        let products = fixture();
        let out = run(&products, &ViewParams::default().with_search("   \t"));
        assert_eq!(out.len(), products.len());
    }

    #[test]
    fn search_text_is_matched_as_typed() {
        let products = fixture();
        let out = run(&products, &ViewParams::default().with_search("ring "));
        assert!(out.is_empty());
        let out = run(&products, &ViewParams::default().with_search("ring"));
        assert_eq!(ids(&out), vec!["6"]);
    }

    #[test]
    fn category_and_search_combine() {
        let products = fixture();
        let params = ViewParams::new("men's clothing", "mens", SortKey::None);
        assert_eq!(ids(&run(&products, &params)), vec!["2", "5"]);
    }

    #[test]
    fn price_sorts_keep_ties_in_fetch_order() {
        let products = fixture();
        let asc = run(&products, &ViewParams::default().with_sort(SortKey::PriceAsc));
        assert_eq!(ids(&asc), vec!["2", "6", "5", "4", "1", "3"]);

        let desc = run(&products, &ViewParams::default().with_sort(SortKey::PriceDesc));
        assert_eq!(ids(&desc), vec!["3", "1", "4", "5", "2", "6"]);
    }

    #[test]
    fn title_sorts_ignore_case() {
        let products = fixture();
        let asc = run(&products, &ViewParams::default().with_sort(SortKey::TitleAsc));
        assert_eq!(ids(&asc), vec!["1", "3", "2", "5", "6", "4"]);

        let desc = run(&products, &ViewParams::default().with_sort(SortKey::TitleDesc));
        assert_eq!(ids(&desc), vec!["4", "6", "5", "2", "3", "1"]);
    }

    #[test]
    fn title_ties_keep_fetch_order_in_both_directions() {
        let products = vec![
            product(1, "Same", 1.0, "a"),
            product(2, "Other", 1.0, "a"),
            product(3, "Same", 1.0, "a"),
        ];
        let asc = run(&products, &ViewParams::default().with_sort(SortKey::TitleAsc));
        assert_eq!(ids(&asc), vec!["2", "1", "3"]);
        let desc = run(&products, &ViewParams::default().with_sort(SortKey::TitleDesc));
        assert_eq!(ids(&desc), vec!["1", "3", "2"]);
    }

    #[test]
    fn pipeline_does_not_touch_input() {
        let products = fixture();
        let before = products.clone();
        let _ = run(&products, &ViewParams::new("jewelery", "a", SortKey::TitleDesc));
        assert_eq!(products, before);
    }

    #[test]
    fn sort_key_parses_wire_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert_eq!("".parse::<SortKey>().unwrap(), SortKey::None);
        assert!("price".parse::<SortKey>().is_err());
    }

    #[test]
    fn sort_key_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&SortKey::PriceDesc).unwrap(), "\"price-desc\"");
        let key: SortKey = serde_json::from_str("\"title-asc\"").unwrap();
        assert_eq!(key, SortKey::TitleAsc);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        const CATEGORIES: [&str; 3] = ["a", "b", "c"];

        fn arb_products() -> impl Strategy<Value = Vec<Product>> {
            prop::collection::vec(
                ("[A-Za-z ]{1,12}", 0u32..500, 0usize..CATEGORIES.len()),
                0..40,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .enumerate()
                    .map(|(i, (title, cents, cat))| {
                        let title = if title.trim().is_empty() { "x".to_string() } else { title };
                        product(i as u64, &title, f64::from(cents) / 4.0, CATEGORIES[cat])
                    })
                    .collect()
            })
        }

        fn arb_sort() -> impl Strategy<Value = SortKey> {
            prop::sample::select(SortKey::ALL.to_vec())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: category filter keeps exactly the matching products.
            #[test]
            fn category_filter_is_sound_and_complete(products in arb_products(), cat in 0usize..3) {
                let c = CATEGORIES[cat];
                let out = run(&products, &ViewParams::default().with_category(c));
                prop_assert!(out.iter().all(|p| p.category() == c));
                prop_assert_eq!(out.len(), products.iter().filter(|p| p.category() == c).count());
            }

            /// Property: every search hit contains the needle, ignoring case.
            #[test]
            fn search_hits_contain_needle(products in arb_products(), s in "[A-Za-z]{1,3}") {
                let out = run(&products, &ViewParams::default().with_search(s.clone()));
                let needle = s.to_lowercase();
                prop_assert!(out.iter().all(|p| p.title().to_lowercase().contains(&needle)));
                prop_assert_eq!(
                    out.len(),
                    products.iter().filter(|p| p.title().to_lowercase().contains(&needle)).count()
                );
            }

            /// Property: blank search leaves the collection untouched, in order.
            #[test]
            fn blank_search_is_identity(products in arb_products(), s in "[ \t]{0,4}") {
                let out = run(&products, &ViewParams::default().with_search(s));
                let expected: Vec<&Product> = products.iter().collect();
                prop_assert_eq!(out, expected);
            }

            /// Property: sorting twice equals sorting once.
            #[test]
            fn sorting_is_idempotent(products in arb_products(), sort in arb_sort()) {
                let once = run(&products, &ViewParams::default().with_sort(sort));
                let mut twice = once.clone();
                sort_products(&mut twice, sort);
                prop_assert_eq!(once, twice);
            }

            /// Property: price orders are monotone.
            #[test]
            fn price_orders_are_monotone(products in arb_products()) {
                let asc = run(&products, &ViewParams::default().with_sort(SortKey::PriceAsc));
                prop_assert!(asc.windows(2).all(|w| w[0].price().value() <= w[1].price().value()));
                let desc = run(&products, &ViewParams::default().with_sort(SortKey::PriceDesc));
                prop_assert!(desc.windows(2).all(|w| w[0].price().value() >= w[1].price().value()));
            }

            /// Property: without ties, reversed price-asc is price-desc.
            #[test]
            fn reversed_ascending_is_descending_without_ties(
                prices in prop::collection::btree_set(0u32..10_000, 0..30)
            ) {
                let products: Vec<Product> = prices
                    .into_iter()
                    .rev()
                    .enumerate()
                    .map(|(i, cents)| product(i as u64, "t", f64::from(cents) / 100.0, "a"))
                    .collect();
                let mut asc = run(&products, &ViewParams::default().with_sort(SortKey::PriceAsc));
                asc.reverse();
                let desc = run(&products, &ViewParams::default().with_sort(SortKey::PriceDesc));
                prop_assert_eq!(asc, desc);
            }

            /// Property: positions match the step-by-step pipeline.
            #[test]
            fn positions_match_composed_steps(
                products in arb_products(),
                cat in 0usize..3,
                s in "[a-z ]{0,2}",
                sort in arb_sort(),
            ) {
                let all: Vec<&Product> = products.iter().collect();
                let mut stepwise = filter_search(filter_category(all, CATEGORIES[cat]), &s);
                sort_products(&mut stepwise, sort);
                let params = ViewParams::new(CATEGORIES[cat], s.clone(), sort);
                prop_assert_eq!(run(&products, &params), stepwise);
            }

            /// Property: filter and search commute.
            #[test]
            fn filter_and_search_commute(products in arb_products(), cat in 0usize..3, s in "[a-z]{1,2}") {
                let all: Vec<&Product> = products.iter().collect();
                let a = filter_search(filter_category(all.clone(), CATEGORIES[cat]), &s);
                let b = filter_category(filter_search(all, &s), CATEGORIES[cat]);
                prop_assert_eq!(a, b);
            }
        }
    }
}
