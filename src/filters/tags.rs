//! Tag filter.

use super::Filter;
use crate::catalog::Product;

/// Passes products carrying at least one of the requested tags.
pub struct TagFilter {
    tags: Vec<String>,
}

impl TagFilter {
    /// Creates a tag filter. Tags match exactly.
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }
}

impl Filter for TagFilter {
    fn matches(&self, product: &Product) -> bool {
        self.tags.is_empty() || self.tags.iter().any(|tag| product.has_tag(tag))
    }

    fn description(&self) -> String {
        if self.tags.is_empty() {
            "Tags: any".to_string()
        } else {
            format!("Tags: any of {}", self.tags.join(", "))
        }
    }
}
