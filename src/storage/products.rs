//! Product repository
//!
//! Holds the product catalogue in memory, keyed by product ID. A `BTreeMap`
//! keeps iteration in ascending ID order so listings are deterministic.

use std::collections::BTreeMap;

use crate::models::{Product, ProductId};

/// Repository for products
#[derive(Debug, Default)]
pub struct ProductRepository {
    data: BTreeMap<ProductId, Product>,
}

impl ProductRepository {
    /// Create an empty product repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a product by ID
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.data.get(&id)
    }

    /// Get a product by ID for in-place modification
    pub fn get_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.data.get_mut(&id)
    }

    /// Check whether a product ID is taken
    pub fn contains(&self, id: ProductId) -> bool {
        self.data.contains_key(&id)
    }

    /// Insert a product, returning it back if the ID is already taken
    pub fn insert(&mut self, product: Product) -> Result<(), Product> {
        if self.data.contains_key(&product.id) {
            return Err(product);
        }
        self.data.insert(product.id, product);
        Ok(())
    }

    /// Iterate over all products in ID order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.data.values()
    }

    /// Get all products in ID order
    pub fn get_all(&self) -> Vec<Product> {
        self.data.values().cloned().collect()
    }

    /// Number of products stocked
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the catalogue is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn product(id: u32, name: &str) -> Product {
        Product::new(ProductId::new(id), name, Money::from_cents(100), 5)
    }

    #[test]
    fn test_insert_and_get() {
        let mut repo = ProductRepository::new();
        repo.insert(product(1, "Pen")).unwrap();

        assert!(repo.contains(ProductId::new(1)));
        assert_eq!(repo.get(ProductId::new(1)).unwrap().name, "Pen");
        assert!(repo.get(ProductId::new(2)).is_none());
    }

    #[test]
    fn test_insert_duplicate_keeps_original() {
        let mut repo = ProductRepository::new();
        repo.insert(product(1, "Pen")).unwrap();

        let rejected = repo.insert(product(1, "Pencil")).unwrap_err();
        assert_eq!(rejected.name, "Pencil");
        assert_eq!(repo.get(ProductId::new(1)).unwrap().name, "Pen");
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_iteration_is_id_ordered() {
        let mut repo = ProductRepository::new();
        repo.insert(product(10, "Stapler")).unwrap();
        repo.insert(product(2, "Pen")).unwrap();
        repo.insert(product(7, "Ruler")).unwrap();

        let ids: Vec<u32> = repo.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![2, 7, 10]);
    }

    #[test]
    fn test_empty() {
        let repo = ProductRepository::new();
        assert!(repo.is_empty());
        assert!(repo.get_all().is_empty());
    }
}
