//! Catalog service
//!
//! Read-only access to the static product catalog.

use crate::domain::entities::{Product, ProductFilter, CATALOG};
use crate::error::DomainError;

/// Service for browsing the product catalog
pub struct CatalogService {
    products: &'static [Product],
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(&CATALOG)
    }
}

impl CatalogService {
    pub fn new(products: &'static [Product]) -> Self {
        Self { products }
    }

    /// List products passing `filter`, in catalog order
    pub fn list(&self, filter: &ProductFilter) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p))
            .copied()
            .collect()
    }

    /// Look up a product by its exact slug
    pub fn get(&self, slug: &str) -> Result<Product, DomainError> {
        self.products
            .iter()
            .find(|p| p.slug == slug)
            .copied()
            .ok_or_else(|| DomainError::NotFound("Product not found".to_string()))
    }
}
