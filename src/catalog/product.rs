//! # Product Record
//!
//! The sole entity held by the catalog. Wire field names are camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A product record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: String,

    /// Display name, unique case-insensitively across the store
    pub name: String,

    /// Free-text description
    pub description: String,

    /// Non-negative price
    pub price: f64,

    /// Category, always stored lowercase
    pub category: String,

    /// Stock availability, defaults to true on creation
    pub in_stock: bool,

    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,

    /// Refreshed on every mutation
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Case-insensitive name equality, used for uniqueness checks
    pub fn name_matches(&self, other: &str) -> bool {
        self.name.to_lowercase() == other.to_lowercase()
    }
}

/// Fixed records the store starts with
pub fn seed_products() -> Vec<Product> {
    let now = Utc::now();
    vec![
        Product {
            id: "1".to_string(),
            name: "Laptop".to_string(),
            description: "High-performance laptop with 16GB RAM".to_string(),
            price: 1200.0,
            category: "electronics".to_string(),
            in_stock: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            id: "2".to_string(),
            name: "Smartphone".to_string(),
            description: "Latest model with 128GB storage".to_string(),
            price: 800.0,
            category: "electronics".to_string(),
            in_stock: true,
            created_at: now,
            updated_at: now,
        },
        Product {
            id: "3".to_string(),
            name: "Coffee Maker".to_string(),
            description: "Programmable coffee maker with timer".to_string(),
            price: 50.0,
            category: "kitchen".to_string(),
            in_stock: false,
            created_at: now,
            updated_at: now,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_invariants() {
        let seeds = seed_products();
        assert_eq!(seeds.len(), 3);
        for p in &seeds {
            assert!(p.price >= 0.0);
            assert_eq!(p.category, p.category.to_lowercase());
            assert!(!p.name.is_empty());
        }
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let p = &seed_products()[0];
        assert!(p.name_matches("laptop"));
        assert!(p.name_matches("LAPTOP"));
        assert!(!p.name_matches("laptop pro"));
    }

    #[test]
    fn test_wire_field_names() {
        let p = &seed_products()[0];
        let json = serde_json::to_value(p).unwrap();
        assert!(json.get("inStock").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
        assert!(json.get("in_stock").is_none());
    }
}
