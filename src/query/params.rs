//! # Query Parameter Parser
//!
//! Parses the listing endpoint's raw query parameters into a structured
//! query. Parsing never fails: malformed values fall back to defaults or
//! are silently dropped, matching the coercion rules of the endpoint.

use std::collections::HashMap;

/// Default page when absent or non-numeric
pub const DEFAULT_PAGE: usize = 1;

/// Default page size when absent or non-numeric
pub const DEFAULT_LIMIT: usize = 10;

/// Recognized sort keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    Category,
    CreatedAt,
}

impl SortKey {
    /// Parse a sortBy value; unrecognized keys yield None (no sort)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(SortKey::Name),
            "price" => Some(SortKey::Price),
            "category" => Some(SortKey::Category),
            "createdAt" => Some(SortKey::CreatedAt),
            _ => None,
        }
    }
}

/// Parsed listing query
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Substring search over name, description, and category
    pub search: Option<String>,

    /// Category equality filter (case-insensitive)
    pub category: Option<String>,

    /// Stock filter; "true" (case-insensitive) parses true, anything else false
    pub in_stock: Option<bool>,

    /// Inclusive lower price bound; non-finite values are dropped
    pub min_price: Option<f64>,

    /// Inclusive upper price bound; non-finite values are dropped
    pub max_price: Option<f64>,

    /// Recognized sort key, None when absent or unrecognized
    pub sort_by: Option<SortKey>,

    /// Raw sortBy value, echoed back even when unrecognized
    pub sort_by_raw: Option<String>,

    /// Raw sortOrder value, echoed back; "desc" reverses the sort
    pub sort_order_raw: Option<String>,

    /// 1-based page number
    pub page: usize,

    /// Page size
    pub limit: usize,
}

impl ListQuery {
    /// Parse query parameters from the raw query map
    pub fn parse(params: &HashMap<String, String>) -> Self {
        let sort_by_raw = params.get("sortBy").cloned();
        let sort_by = sort_by_raw.as_deref().and_then(SortKey::parse);

        Self {
            search: params.get("search").cloned(),
            category: params.get("category").cloned(),
            in_stock: params
                .get("inStock")
                .map(|v| v.to_lowercase() == "true"),
            min_price: parse_price_bound(params.get("minPrice")),
            max_price: parse_price_bound(params.get("maxPrice")),
            sort_by,
            sort_by_raw,
            sort_order_raw: params.get("sortOrder").cloned(),
            page: parse_positive(params.get("page"), DEFAULT_PAGE),
            limit: parse_positive(params.get("limit"), DEFAULT_LIMIT),
        }
    }

    /// Whether the sort runs descending
    pub fn descending(&self) -> bool {
        self.sort_order_raw.as_deref() == Some("desc")
    }
}

/// Parse a price bound; non-numeric or non-finite values are ignored
fn parse_price_bound(value: Option<&String>) -> Option<f64> {
    value
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

/// Integer parse-or-default, clamped to a floor of 1.
/// Zero and negative inputs fall back to the floor rather than producing
/// empty or inverted slices downstream.
fn parse_positive(value: Option<&String>, default: usize) -> usize {
    value
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(default)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let q = ListQuery::parse(&HashMap::new());
        assert_eq!(q.page, DEFAULT_PAGE);
        assert_eq!(q.limit, DEFAULT_LIMIT);
        assert!(q.search.is_none());
        assert!(q.sort_by.is_none());
        assert!(!q.descending());
    }

    #[test]
    fn test_non_numeric_page_falls_back() {
        let q = ListQuery::parse(&query(&[("page", "abc"), ("limit", "xyz")]));
        assert_eq!(q.page, DEFAULT_PAGE);
        assert_eq!(q.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_zero_and_negative_page_clamped() {
        let q = ListQuery::parse(&query(&[("page", "0"), ("limit", "0")]));
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 1);

        let q = ListQuery::parse(&query(&[("page", "-2")]));
        assert_eq!(q.page, DEFAULT_PAGE);
    }

    #[test]
    fn test_in_stock_parsing() {
        assert_eq!(
            ListQuery::parse(&query(&[("inStock", "true")])).in_stock,
            Some(true)
        );
        assert_eq!(
            ListQuery::parse(&query(&[("inStock", "TRUE")])).in_stock,
            Some(true)
        );
        // Anything other than "true" parses false
        assert_eq!(
            ListQuery::parse(&query(&[("inStock", "yes")])).in_stock,
            Some(false)
        );
        assert_eq!(ListQuery::parse(&HashMap::new()).in_stock, None);
    }

    #[test]
    fn test_non_numeric_price_bound_dropped() {
        let q = ListQuery::parse(&query(&[("minPrice", "cheap"), ("maxPrice", "100")]));
        assert_eq!(q.min_price, None);
        assert_eq!(q.max_price, Some(100.0));
    }

    #[test]
    fn test_non_finite_price_bound_dropped() {
        let q = ListQuery::parse(&query(&[("minPrice", "inf"), ("maxPrice", "NaN")]));
        assert_eq!(q.min_price, None);
        assert_eq!(q.max_price, None);
    }

    #[test]
    fn test_sort_key_parsing() {
        assert_eq!(SortKey::parse("price"), Some(SortKey::Price));
        assert_eq!(SortKey::parse("createdAt"), Some(SortKey::CreatedAt));
        assert_eq!(SortKey::parse("rating"), None);

        // Unrecognized sortBy is still echoed raw
        let q = ListQuery::parse(&query(&[("sortBy", "rating")]));
        assert_eq!(q.sort_by, None);
        assert_eq!(q.sort_by_raw.as_deref(), Some("rating"));
    }

    #[test]
    fn test_sort_order() {
        assert!(ListQuery::parse(&query(&[("sortOrder", "desc")])).descending());
        // Only the exact value "desc" reverses
        assert!(!ListQuery::parse(&query(&[("sortOrder", "DESC")])).descending());
        assert!(!ListQuery::parse(&query(&[("sortOrder", "down")])).descending());
    }
}
