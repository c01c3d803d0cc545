//! Read-only product catalog with validation and loading.

pub mod models;
pub mod seed;

pub use models::{Category, Product, Shipping, Variant, Vendor};

use crate::error::CatalogError;
use crate::query::QueryEngine;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

/// An ordered, validated collection of products.
///
/// Product ids are unique, prices and shipping costs are non-negative, and
/// ratings stay within 0-5. The product list is never mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting records that break catalog invariants.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            validate(product)?;
        }

        Ok(Self { products })
    }

    /// Returns the built-in demo catalog.
    pub fn demo() -> Self {
        Self { products: seed::demo_products() }
    }

    /// Parses a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).context("Failed to parse catalog JSON")?;
        Ok(Self::new(products)?)
    }

    /// Loads a catalog from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

        Self::from_json(&content)
            .with_context(|| format!("Failed to load catalog file: {}", path.display()))
    }

    /// Loads the configured catalog file, or the demo catalog if none is set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No catalog file configured, using demo catalog");
                Ok(Self::demo())
            }
        }
    }

    /// Returns the products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Returns the number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns true if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns a query engine over this catalog.
    pub fn engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.products)
    }
}

fn validate(product: &Product) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidProduct {
        id: product.id.clone(),
        reason: reason.to_string(),
    };

    if product.id.trim().is_empty() {
        return Err(invalid("id must not be empty"));
    }
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(invalid("price must be a non-negative number"));
    }
    if let Some(compare) = product.compare_price {
        if !compare.is_finite() || compare < 0.0 {
            return Err(invalid("compare price must be a non-negative number"));
        }
    }
    if !(0.0..=5.0).contains(&product.average_rating) {
        return Err(invalid("average rating must be between 0 and 5"));
    }
    if let Some(shipping) = &product.shipping {
        if !shipping.cost.is_finite() || shipping.cost < 0.0 {
            return Err(invalid("shipping cost must be a non-negative number"));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_demo_catalog() {
        let catalog = Catalog::demo();
        assert_eq!(catalog.len(), 4);
        assert!(!catalog.is_empty());
        assert_eq!(catalog.products()[0].id, "prod_1");
    }

    #[test]
    fn test_new_accepts_demo_products() {
        let catalog = Catalog::new(seed::demo_products()).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.engine().featured().len(), 0);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut products = seed::demo_products();
        products[3].id = "prod_1".to_string();

        let err = Catalog::new(products).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId("prod_1".to_string()));
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut products = seed::demo_products();
        products[0].price = -1.0;

        let err = Catalog::new(products).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidProduct { ref id, .. } if id == "prod_1"));
    }

    #[test]
    fn test_nan_price_rejected() {
        let mut products = seed::demo_products();
        products[1].price = f64::NAN;
        assert!(Catalog::new(products).is_err());
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut products = seed::demo_products();
        products[2].average_rating = 5.5;
        assert!(Catalog::new(products).is_err());
    }

    #[test]
    fn test_negative_shipping_rejected() {
        let mut products = seed::demo_products();
        if let Some(shipping) = products[3].shipping.as_mut() {
            shipping.cost = -5.0;
        }
        assert!(Catalog::new(products).is_err());
    }

    #[test]
    fn test_from_json_roundtrip() {
        let json = serde_json::to_string(Catalog::demo().products()).unwrap();
        let catalog = Catalog::from_json(&json).unwrap();
        assert_eq!(catalog.products(), Catalog::demo().products());
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Catalog::from_json("not json").unwrap_err().to_string();
        assert!(err.contains("Failed to parse catalog JSON"));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        let json = serde_json::to_string(Catalog::demo().products()).unwrap();
        write!(file, "{}", json).unwrap();

        let catalog = Catalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_from_file_not_found() {
        let err = Catalog::from_file("/nonexistent/catalog.json").unwrap_err().to_string();
        assert!(err.contains("Failed to read catalog file"));
    }

    #[test]
    fn test_load_without_path_uses_demo() {
        let catalog = Catalog::load(None).unwrap();
        assert_eq!(catalog.len(), 4);
    }
}
