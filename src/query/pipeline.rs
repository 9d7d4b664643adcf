//! # Listing Pipeline
//!
//! Applies the fixed stage order over a store snapshot:
//! search -> category -> stock -> price range -> sort -> paginate.
//! Sort must precede pagination; pagination is always last.

use std::cmp::Ordering;

use serde::Serialize;

use crate::catalog::Product;

use super::params::{ListQuery, SortKey};

/// Pipeline result: one page of products plus metadata
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    pub products: Vec<Product>,
    pub pagination: Pagination,
    pub filters: FilterEcho,
}

/// Pagination metadata over the post-filter, pre-pagination set
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_products: usize,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// Echo of the filter/sort parameters that were applied, with defaults
/// substituted. Unapplied filters echo as null.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterEcho {
    pub search: Option<String>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub sort_by: Option<String>,
    pub sort_order: String,
}

/// Run the full pipeline over a snapshot
pub fn run(snapshot: Vec<Product>, query: &ListQuery) -> QueryOutcome {
    let mut matched = apply_search(snapshot, query);
    matched = apply_category(matched, query);
    matched = apply_stock(matched, query);
    matched = apply_price_range(matched, query);
    apply_sort(&mut matched, query);

    let total_products = matched.len();
    let page = query.page;
    let limit = query.limit;
    let start = (page - 1) * limit;

    let products: Vec<Product> = matched.into_iter().skip(start).take(limit).collect();

    let pagination = Pagination {
        current_page: page,
        total_pages: total_products.div_ceil(limit),
        total_products,
        has_next_page: start + limit < total_products,
        has_prev_page: page > 1,
    };

    let filters = FilterEcho {
        search: query.search.clone(),
        category: query.category.clone(),
        in_stock: query.in_stock,
        min_price: query.min_price,
        max_price: query.max_price,
        sort_by: query.sort_by_raw.clone(),
        sort_order: query
            .sort_order_raw
            .clone()
            .unwrap_or_else(|| "asc".to_string()),
    };

    QueryOutcome {
        products,
        pagination,
        filters,
    }
}

/// Substring search over name, description, and category
fn apply_search(products: Vec<Product>, query: &ListQuery) -> Vec<Product> {
    let Some(term) = &query.search else {
        return products;
    };
    let term = term.to_lowercase();

    products
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&term)
                || p.description.to_lowercase().contains(&term)
                || p.category.to_lowercase().contains(&term)
        })
        .collect()
}

/// Case-insensitive category equality
fn apply_category(products: Vec<Product>, query: &ListQuery) -> Vec<Product> {
    let Some(category) = &query.category else {
        return products;
    };
    let category = category.to_lowercase();

    products
        .into_iter()
        .filter(|p| p.category.to_lowercase() == category)
        .collect()
}

/// Stock availability filter
fn apply_stock(products: Vec<Product>, query: &ListQuery) -> Vec<Product> {
    let Some(wanted) = query.in_stock else {
        return products;
    };

    products
        .into_iter()
        .filter(|p| p.in_stock == wanted)
        .collect()
}

/// Inclusive price bounds; an unparsed bound is simply not applied
fn apply_price_range(products: Vec<Product>, query: &ListQuery) -> Vec<Product> {
    products
        .into_iter()
        .filter(|p| query.min_price.map_or(true, |min| p.price >= min))
        .filter(|p| query.max_price.map_or(true, |max| p.price <= max))
        .collect()
}

/// Stable sort by the recognized key; string keys compare case-insensitively
fn apply_sort(products: &mut [Product], query: &ListQuery) {
    let Some(key) = query.sort_by else {
        return;
    };
    let descending = query.descending();

    products.sort_by(|a, b| {
        let cmp = match key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
            SortKey::Category => a.category.to_lowercase().cmp(&b.category.to_lowercase()),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        if descending {
            cmp.reverse()
        } else {
            cmp
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::collections::HashMap;

    fn sample(id: &str, name: &str, category: &str, price: f64, in_stock: bool) -> Product {
        let now = Utc::now();
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("{} description", name),
            price,
            category: category.to_string(),
            in_stock,
            created_at: now + Duration::seconds(id.parse::<i64>().unwrap_or(0)),
            updated_at: now,
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            sample("1", "Laptop", "electronics", 1200.0, true),
            sample("2", "Smartphone", "electronics", 800.0, true),
            sample("3", "Coffee Maker", "kitchen", 50.0, false),
        ]
    }

    fn parse(pairs: &[(&str, &str)]) -> ListQuery {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ListQuery::parse(&map)
    }

    #[test]
    fn test_search_matches_any_of_three_fields() {
        let out = run(fixture(), &parse(&[("search", "coffee")]));
        assert_eq!(out.products.len(), 1);
        assert_eq!(out.products[0].name, "Coffee Maker");

        // Category is searched too
        let out = run(fixture(), &parse(&[("search", "ELECTRO")]));
        assert_eq!(out.products.len(), 2);
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let out = run(fixture(), &parse(&[("category", "Kitchen")]));
        assert_eq!(out.products.len(), 1);
        assert_eq!(out.products[0].id, "3");
    }

    #[test]
    fn test_stock_filter() {
        let out = run(fixture(), &parse(&[("inStock", "true")]));
        assert_eq!(out.products.len(), 2);

        let out = run(fixture(), &parse(&[("inStock", "false")]));
        assert_eq!(out.products.len(), 1);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let out = run(fixture(), &parse(&[("minPrice", "800"), ("maxPrice", "800")]));
        assert_eq!(out.products.len(), 1);
        assert_eq!(out.products[0].price, 800.0);
    }

    #[test]
    fn test_max_price_over_seed_set() {
        let out = run(fixture(), &parse(&[("maxPrice", "800")]));
        let prices: Vec<_> = out.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![800.0, 50.0]);
        assert_eq!(out.pagination.total_products, 2);
    }

    #[test]
    fn test_sort_price_desc_non_increasing() {
        let out = run(
            fixture(),
            &parse(&[("sortBy", "price"), ("sortOrder", "desc")]),
        );
        let prices: Vec<_> = out.products.iter().map(|p| p.price).collect();
        assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_name_is_case_insensitive() {
        let mut products = fixture();
        products.push(sample("4", "aircon", "electronics", 300.0, true));

        let out = run(products, &parse(&[("sortBy", "name")]));
        let names: Vec<_> = out.products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["aircon", "Coffee Maker", "Laptop", "Smartphone"]);
    }

    #[test]
    fn test_unrecognized_sort_preserves_order() {
        let out = run(fixture(), &parse(&[("sortBy", "rating")]));
        let ids: Vec<_> = out.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        // Raw value is still echoed
        assert_eq!(out.filters.sort_by.as_deref(), Some("rating"));
    }

    #[test]
    fn test_pagination_metadata() {
        let out = run(fixture(), &parse(&[("page", "2"), ("limit", "1")]));
        assert_eq!(out.products.len(), 1);
        assert_eq!(out.products[0].id, "2");
        assert_eq!(out.pagination.current_page, 2);
        assert_eq!(out.pagination.total_pages, 3);
        assert_eq!(out.pagination.total_products, 3);
        assert!(out.pagination.has_next_page);
        assert!(out.pagination.has_prev_page);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let out = run(fixture(), &parse(&[("page", "9")]));
        assert!(out.products.is_empty());
        assert_eq!(out.pagination.total_products, 3);
        assert!(!out.pagination.has_next_page);
        assert!(out.pagination.has_prev_page);
    }

    #[test]
    fn test_filter_echo_defaults() {
        let out = run(fixture(), &parse(&[]));
        assert_eq!(out.filters.sort_order, "asc");
        assert!(out.filters.search.is_none());
        assert!(out.filters.in_stock.is_none());

        let json = serde_json::to_value(&out.filters).unwrap();
        assert!(json["search"].is_null());
        assert_eq!(json["sortOrder"], "asc");
    }

    #[test]
    fn test_stages_compose() {
        let out = run(
            fixture(),
            &parse(&[
                ("category", "electronics"),
                ("inStock", "true"),
                ("sortBy", "price"),
            ]),
        );
        let prices: Vec<_> = out.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![800.0, 1200.0]);
    }
}
