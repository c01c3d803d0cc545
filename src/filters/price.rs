//! Price range filter.

use super::Filter;
use crate::catalog::Product;

/// Filters products by price range. Both bounds are inclusive.
pub struct PriceFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceFilter {
    /// Creates a new price filter with optional min/max bounds.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Creates a filter with only minimum price.
    pub fn min(price: f64) -> Self {
        Self { min: Some(price), max: None }
    }

    /// Creates a filter with only maximum price.
    pub fn max(price: f64) -> Self {
        Self { min: None, max: Some(price) }
    }

    /// Creates a filter with both min and max.
    pub fn range(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }
}

impl Filter for PriceFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(min) = self.min {
            if product.price < min {
                return false;
            }
        }

        if let Some(max) = self.max {
            if product.price > max {
                return false;
            }
        }

        true
    }

    fn description(&self) -> String {
        match (self.min, self.max) {
            (Some(min), Some(max)) => format!("Price: ${:.2} - ${:.2}", min, max),
            (Some(min), None) => format!("Price: >= ${:.2}", min),
            (None, Some(max)) => format!("Price: <= ${:.2}", max),
            (None, None) => "Price: any".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_products;

    fn make_product(price: f64) -> Product {
        let mut product = demo_products().remove(0);
        product.price = price;
        product
    }

    #[test]
    fn test_price_range() {
        let filter = PriceFilter::range(10.0, 50.0);

        assert!(!filter.matches(&make_product(5.0)));
        assert!(filter.matches(&make_product(10.0)));
        assert!(filter.matches(&make_product(30.0)));
        assert!(filter.matches(&make_product(50.0)));
        assert!(!filter.matches(&make_product(55.0)));
    }

    #[test]
    fn test_min_only() {
        let filter = PriceFilter::min(20.0);
        assert!(!filter.matches(&make_product(10.0)));
        assert!(filter.matches(&make_product(20.0)));
        assert!(filter.matches(&make_product(100.0)));
    }

    #[test]
    fn test_max_only() {
        let filter = PriceFilter::max(50.0);
        assert!(filter.matches(&make_product(0.0)));
        assert!(filter.matches(&make_product(50.0)));
        assert!(!filter.matches(&make_product(100.0)));
    }

    #[test]
    fn test_new_no_bounds() {
        let filter = PriceFilter::new(None, None);
        assert!(filter.matches(&make_product(0.0)));
        assert!(filter.matches(&make_product(1_000_000.0)));
    }

    #[test]
    fn test_inverted_bounds_match_nothing() {
        let filter = PriceFilter::range(500.0, 100.0);
        assert!(!filter.matches(&make_product(300.0)));
        assert!(!filter.matches(&make_product(50.0)));
    }

    #[test]
    fn test_boundary_values() {
        let filter = PriceFilter::range(199.99, 299.99);
        assert!(filter.matches(&make_product(199.99)));
        assert!(filter.matches(&make_product(299.99)));
        assert!(!filter.matches(&make_product(199.98)));
        assert!(!filter.matches(&make_product(300.0)));
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(PriceFilter::range(10.0, 50.0).description(), "Price: $10.00 - $50.00");
        assert_eq!(PriceFilter::min(20.0).description(), "Price: >= $20.00");
        assert_eq!(PriceFilter::max(50.0).description(), "Price: <= $50.00");
        assert_eq!(PriceFilter::new(None, None).description(), "Price: any");
    }
}
