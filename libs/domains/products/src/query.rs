//! Filtering, pagination and name search over a product list.
//!
//! Query-string values are kept as raw strings and coerced here so that bad
//! input degrades to defaults instead of rejecting the request.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 10;

/// Message for a search without a query term.
pub const SEARCH_QUERY_REQUIRED: &str = "Search query parameter \"q\" is required";

/// Query parameters accepted by the list endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Exact category, case-insensitive
    pub category: Option<String>,
    /// `true` for in-stock products, any other value for out-of-stock
    pub in_stock: Option<String>,
    /// 1-based page number (default 1)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
}

/// Query parameters accepted by the search endpoint
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Case-insensitive substring of the product name
    pub q: Option<String>,
}

/// Parsed filter part of a [`ProductQuery`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub in_stock: Option<bool>,
}

/// Parsed pagination part of a [`ProductQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pagination metadata returned next to a page of results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Number of products matching the filter
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// One page of products
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductPage {
    pub data: Vec<Product>,
    pub meta: PageMeta,
}

impl ProductQuery {
    pub fn filter(&self) -> ProductFilter {
        ProductFilter {
            category: non_empty(&self.category).map(str::to_string),
            in_stock: non_empty(&self.in_stock).map(|v| v.eq_ignore_ascii_case("true")),
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: lenient_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            limit: lenient_positive(self.limit.as_deref()).unwrap_or(DEFAULT_LIMIT),
        }
    }
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(ref category) = self.category {
            if product.category.to_lowercase() != category.to_lowercase() {
                return false;
            }
        }
        if let Some(in_stock) = self.in_stock {
            if product.in_stock != in_stock {
                return false;
            }
        }
        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Reads the leading decimal digits of `raw` (after optional whitespace and
/// `+`). Zero, negative, and non-numeric input yield `None`; digits too large
/// for `usize` saturate.
fn lenient_positive(raw: Option<&str>) -> Option<usize> {
    let trimmed = raw?.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    // Only overflow can fail here.
    let value = digits.parse::<usize>().unwrap_or(usize::MAX);
    (value > 0).then_some(value)
}

/// Applies `filter` then slices out the requested page.
pub fn paginate(products: Vec<Product>, filter: &ProductFilter, pagination: Pagination) -> ProductPage {
    let filtered: Vec<Product> = products.into_iter().filter(|p| filter.matches(p)).collect();
    let total = filtered.len();

    let start = pagination
        .page
        .saturating_sub(1)
        .saturating_mul(pagination.limit)
        .min(total);
    let end = pagination.page.saturating_mul(pagination.limit).min(total);

    let data = filtered
        .into_iter()
        .skip(start)
        .take(end - start)
        .collect();

    ProductPage {
        data,
        meta: PageMeta {
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages: total.div_ceil(pagination.limit),
        },
    }
}

/// Products whose name contains `q`, ignoring case, in store order.
pub fn search(products: Vec<Product>, q: Option<&str>) -> ProductResult<Vec<Product>> {
    let needle = q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ProductError::Validation(SEARCH_QUERY_REQUIRED.to_string()))?
        .to_lowercase();

    Ok(products
        .into_iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_products;

    fn product(id: &str, name: &str, category: &str, in_stock: bool) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price: 1.0,
            category: category.to_string(),
            in_stock,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("a", "Laptop", "Electronics", true),
            product("b", "Desk", "Furniture", false),
            product("c", "Headphones", "electronics", false),
            product("d", "Chair", "Furniture", true),
        ]
    }

    fn query(pairs: &[(&str, &str)]) -> ProductQuery {
        let mut q = ProductQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "category" => q.category = value,
                "inStock" => q.in_stock = value,
                "page" => q.page = value,
                "limit" => q.limit = value,
                other => panic!("unknown key {other}"),
            }
        }
        q
    }

    #[test]
    fn test_lenient_positive() {
        assert_eq!(lenient_positive(Some("3")), Some(3));
        assert_eq!(lenient_positive(Some(" 12abc")), Some(12));
        assert_eq!(lenient_positive(Some("+4")), Some(4));
        assert_eq!(lenient_positive(Some("abc")), None);
        assert_eq!(lenient_positive(Some("0")), None);
        assert_eq!(lenient_positive(Some("-2")), None);
        assert_eq!(lenient_positive(Some("")), None);
        assert_eq!(lenient_positive(None), None);
    }

    #[test]
    fn test_oversized_page_is_past_the_end() {
        assert_eq!(lenient_positive(Some("99999999999999999999")), Some(usize::MAX));
        assert_eq!(lenient_positive(Some("000000000000000000000000")), None);

        let q = query(&[("page", "99999999999999999999")]);
        let page = paginate(catalog(), &q.filter(), q.pagination());
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 4);
        assert_eq!(page.meta.page, usize::MAX);
        assert_eq!(page.meta.total_pages, 1);
    }

    #[test]
    fn test_pagination_defaults_on_bad_input() {
        let q = query(&[("page", "two"), ("limit", "lots")]);
        assert_eq!(q.pagination(), Pagination::default());
    }

    #[test]
    fn test_category_filter_is_case_insensitive() {
        let q = query(&[("category", "ELECTRONICS")]);
        let page = paginate(catalog(), &q.filter(), q.pagination());

        let ids: Vec<&str> = page.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert_eq!(page.meta.total, 2);
    }

    #[test]
    fn test_in_stock_filter() {
        let q = query(&[("inStock", "TRUE")]);
        assert_eq!(q.filter().in_stock, Some(true));
        let page = paginate(catalog(), &q.filter(), q.pagination());
        assert!(page.data.iter().all(|p| p.in_stock));
        assert_eq!(page.meta.total, 2);

        let q = query(&[("inStock", "no")]);
        assert_eq!(q.filter().in_stock, Some(false));

        let q = query(&[("inStock", "")]);
        assert_eq!(q.filter().in_stock, None);
    }

    #[test]
    fn test_combined_filters() {
        let q = query(&[("category", "furniture"), ("inStock", "true")]);
        let page = paginate(catalog(), &q.filter(), q.pagination());
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "d");
    }

    #[test]
    fn test_second_page_of_one() {
        let q = query(&[("page", "2"), ("limit", "1")]);
        let page = paginate(seed_products(), &q.filter(), q.pagination());

        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "2");
        assert_eq!(
            page.meta,
            PageMeta {
                total: 2,
                page: 2,
                limit: 1,
                total_pages: 2
            }
        );
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let q = query(&[("page", "9"), ("limit", "3")]);
        let page = paginate(catalog(), &q.filter(), q.pagination());
        assert!(page.data.is_empty());
        assert_eq!(page.meta.total, 4);
        assert_eq!(page.meta.total_pages, 2);
    }

    #[test]
    fn test_partial_last_page() {
        let q = query(&[("page", "2"), ("limit", "3")]);
        let page = paginate(catalog(), &q.filter(), q.pagination());
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, "d");
    }

    #[test]
    fn test_empty_result_has_zero_pages() {
        let q = query(&[("category", "Toys")]);
        let page = paginate(catalog(), &q.filter(), q.pagination());
        assert_eq!(page.meta.total, 0);
        assert_eq!(page.meta.total_pages, 0);
    }

    #[test]
    fn test_search_matches_substring_ignoring_case() {
        let found = search(catalog(), Some("PHONE")).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "c");
    }

    #[test]
    fn test_search_requires_query() {
        assert!(matches!(search(catalog(), None), Err(ProductError::Validation(_))));
        assert!(matches!(search(catalog(), Some("")), Err(ProductError::Validation(_))));
    }
}
