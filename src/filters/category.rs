//! Category filter.

use super::Filter;
use crate::catalog::Product;

/// Matches a category by exact id, or by case-insensitive substring of its name.
///
/// `cat_furniture`, `Furniture`, and `furn` all select the same products.
pub struct CategoryFilter {
    value: String,
    needle: String,
}

impl CategoryFilter {
    /// Creates a new category filter.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let needle = value.to_lowercase();
        Self { value, needle }
    }
}

impl Filter for CategoryFilter {
    fn matches(&self, product: &Product) -> bool {
        product.category.id == self.value || product.category.name.to_lowercase().contains(&self.needle)
    }

    fn description(&self) -> String {
        format!("Category: {}", self.value)
    }
}
