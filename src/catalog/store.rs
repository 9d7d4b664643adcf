//! # Catalog Store
//!
//! Ordered in-memory product storage, insertion order preserved. The store
//! is the single source of truth; callers serialize access through one lock
//! at the store boundary (see `http::routes::CatalogState`).

use super::product::{seed_products, Product};

/// In-memory product store
#[derive(Debug, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the fixed seed records
    pub fn seeded() -> Self {
        Self {
            products: seed_products(),
        }
    }

    /// Snapshot of all records in insertion order (defensive copy)
    pub fn list(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Find a record by id
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Case-insensitive exact name match, optionally excluding one id.
    /// Used for uniqueness checks before insert/replace.
    pub fn find_by_name(&self, name: &str, exclude_id: Option<&str>) -> Option<&Product> {
        self.products
            .iter()
            .filter(|p| exclude_id != Some(p.id.as_str()))
            .find(|p| p.name_matches(name))
    }

    /// Append a record. The caller is responsible for having checked the
    /// name-uniqueness invariant via `find_by_name`.
    pub fn insert(&mut self, product: Product) {
        self.products.push(product);
    }

    /// Swap the record at the matching id in place. Returns false if absent.
    pub fn replace(&mut self, id: &str, product: Product) -> bool {
        match self.products.iter_mut().find(|p| p.id == id) {
            Some(slot) => {
                *slot = product;
                true
            }
            None => false,
        }
    }

    /// Excise the record with the given id, returning it
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        let idx = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(idx))
    }
}
