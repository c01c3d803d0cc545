//! Minimum average-rating filter.

use super::Filter;
use crate::catalog::Product;

/// Filters products by minimum average review score.
pub struct RatingFilter {
    min_stars: f64,
}

impl RatingFilter {
    /// Creates a new rating filter with minimum stars.
    ///
    /// The bound is taken as given; a minimum above 5 matches nothing.
    pub fn new(min_stars: f64) -> Self {
        Self { min_stars }
    }
}

impl Filter for RatingFilter {
    fn matches(&self, product: &Product) -> bool {
        product.average_rating >= self.min_stars
    }

    fn description(&self) -> String {
        format!("Rating: >= {:.1} stars", self.min_stars)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed::demo_products;

    fn make_product(rating: f64) -> Product {
        let mut product = demo_products().remove(0);
        product.average_rating = rating;
        product
    }

    #[test]
    fn test_rating_filter() {
        let filter = RatingFilter::new(4.0);

        assert!(!filter.matches(&make_product(3.5)));
        assert!(filter.matches(&make_product(4.0)));
        assert!(filter.matches(&make_product(4.5)));
        assert!(filter.matches(&make_product(5.0)));
    }

    #[test]
    fn test_out_of_range_minimum() {
        let filter = RatingFilter::new(5.5);
        assert!(!filter.matches(&make_product(5.0)));
        assert!(!filter.matches(&make_product(4.9)));

        let filter = RatingFilter::new(-1.0);
        assert!(filter.matches(&make_product(0.0)));
        assert!(filter.matches(&make_product(5.0)));
    }

    #[test]
    fn test_exact_boundary() {
        let filter = RatingFilter::new(4.7);
        assert!(filter.matches(&make_product(4.7)));
        assert!(!filter.matches(&make_product(4.6)));
    }

    #[test]
    fn test_zero_rating_matches_everything() {
        let filter = RatingFilter::new(0.0);
        assert!(filter.matches(&make_product(0.0)));
        assert!(filter.matches(&make_product(5.0)));
    }

    #[test]
    fn test_description() {
        assert_eq!(RatingFilter::new(4.0).description(), "Rating: >= 4.0 stars");
        assert_eq!(RatingFilter::new(3.5).description(), "Rating: >= 3.5 stars");
    }
}
