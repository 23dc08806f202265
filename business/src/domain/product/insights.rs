use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::model::Product;

/// Products with at most this many units (and at least one) count as low stock.
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// Aggregate figures over the current catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub average_price: Option<f64>,
}

/// Result of probing the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreHealth {
    pub reachable: bool,
    pub product_count: usize,
}

/// Orders products by name, ignoring case. Ties fall back to the exact name,
/// then the id, so the order is total.
pub fn sort_by_name(products: &mut [Product]) {
    products.sort_by(compare_by_name);
}

fn compare_by_name(a: &Product, b: &Product) -> Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.id.cmp(&b.id))
}

pub fn compute_stats(products: &[Product]) -> ProductStats {
    let in_stock = products.iter().filter(|p| p.stock > 0).count();
    let low_stock = products
        .iter()
        .filter(|p| p.stock > 0 && p.stock <= LOW_STOCK_THRESHOLD)
        .count();

    let prices = || products.iter().map(|p| p.price);
    let min_price = prices().reduce(f64::min);
    let max_price = prices().reduce(f64::max);
    let average_price = if products.is_empty() {
        None
    } else {
        Some(round_cents(prices().sum::<f64>() / products.len() as f64))
    };

    ProductStats {
        total_products: products.len(),
        in_stock,
        low_stock,
        out_of_stock: products.len() - in_stock,
        min_price,
        max_price,
        average_price,
    }
}

/// Distinct, ordinally sorted categories, skipping blank values.
pub fn distinct_categories(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .filter_map(|p| p.category.as_deref())
        .filter(|c| !c.trim().is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
