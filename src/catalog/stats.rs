//! # Catalog Statistics
//!
//! Aggregate snapshot over the full unfiltered store: stock counts,
//! per-category breakdown, and price statistics.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::product::Product;

/// Full statistics snapshot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub overview: Overview,
    pub category_breakdown: BTreeMap<String, CategoryCount>,
    pub price_stats: PriceStats,
    pub generated_at: DateTime<Utc>,
}

/// Headline counts
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_products: usize,
    pub in_stock_count: usize,
    pub out_of_stock_count: usize,
    pub categories: usize,
}

/// Per-category stock counts
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    pub total: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
}

/// Price aggregates over all current records
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceStats {
    /// Arithmetic mean rounded to 2 decimals
    pub average: f64,
    pub minimum: f64,
    pub maximum: f64,
}

impl CatalogStats {
    /// Compute statistics over a store snapshot
    pub fn compute(products: &[Product]) -> Self {
        let total_products = products.len();
        let in_stock_count = products.iter().filter(|p| p.in_stock).count();
        let out_of_stock_count = total_products - in_stock_count;

        let mut category_breakdown: BTreeMap<String, CategoryCount> = BTreeMap::new();
        for product in products {
            let entry = category_breakdown
                .entry(product.category.clone())
                .or_default();
            entry.total += 1;
            if product.in_stock {
                entry.in_stock += 1;
            } else {
                entry.out_of_stock += 1;
            }
        }

        let price_stats = if products.is_empty() {
            PriceStats {
                average: 0.0,
                minimum: 0.0,
                maximum: 0.0,
            }
        } else {
            let sum: f64 = products.iter().map(|p| p.price).sum();
            let average = (sum / total_products as f64 * 100.0).round() / 100.0;
            let minimum = products.iter().map(|p| p.price).fold(f64::MAX, f64::min);
            let maximum = products.iter().map(|p| p.price).fold(f64::MIN, f64::max);
            PriceStats {
                average,
                minimum,
                maximum,
            }
        };

        Self {
            overview: Overview {
                total_products,
                in_stock_count,
                out_of_stock_count,
                categories: category_breakdown.len(),
            },
            category_breakdown,
            price_stats,
            generated_at: Utc::now(),
        }
    }
}
