use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use crate::models::Product;

/// Catalog-wide counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductStats {
    pub total_products: usize,
    /// Number of products per category, keyed by exact category spelling
    pub categories: BTreeMap<String, usize>,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

/// Tallies the catalog in a single pass.
pub fn compute_stats(products: &[Product]) -> ProductStats {
    products
        .iter()
        .fold(ProductStats::default(), |mut stats, product| {
            stats.total_products += 1;
            *stats.categories.entry(product.category.clone()).or_default() += 1;
            if product.in_stock {
                stats.in_stock += 1;
            } else {
                stats.out_of_stock += 1;
            }
            stats
        })
}
