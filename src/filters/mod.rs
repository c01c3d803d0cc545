//! Product filtering system with composable filters.

pub mod category;
pub mod price;
pub mod rating;
pub mod tags;
pub mod text;

use crate::catalog::Product;

pub use category::CategoryFilter;
pub use price::PriceFilter;
pub use rating::RatingFilter;
pub use tags::TagFilter;
pub use text::TextFilter;

/// Trait for filtering products.
pub trait Filter: Send + Sync {
    /// Returns true if the product passes the filter.
    fn matches(&self, product: &Product) -> bool;

    /// Returns a description of this filter.
    fn description(&self) -> String;
}

/// A chain of filters that must all pass.
pub struct FilterChain {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterChain {
    /// Creates an empty filter chain.
    pub fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Adds a filter to the chain.
    pub fn add(&mut self, filter: impl Filter + 'static) -> &mut Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Checks if a product passes all filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|f| f.matches(product))
    }

    /// Returns the products that pass, in their original order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        products.iter().filter(|p| self.matches(p)).collect()
    }

    /// Returns true if no filters are configured.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Returns the number of filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns descriptions of all filters.
    pub fn descriptions(&self) -> Vec<String> {
        self.filters.iter().map(|f| f.description()).collect()
    }
}

impl Default for FilterChain {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing a FilterChain from query parameters.
pub struct FilterChainBuilder {
    chain: FilterChain,
}

impl FilterChainBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self { chain: FilterChain::new() }
    }

    /// Adds a category filter.
    pub fn category(mut self, category: Option<&str>) -> Self {
        if let Some(category) = category {
            self.chain.add(CategoryFilter::new(category));
        }
        self
    }

    /// Adds a price range filter. Non-finite bounds are ignored.
    pub fn price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        let min = min.filter(|v| v.is_finite());
        let max = max.filter(|v| v.is_finite());
        if min.is_some() || max.is_some() {
            self.chain.add(PriceFilter::new(min, max));
        }
        self
    }

    /// Adds a minimum rating filter. A non-finite minimum is ignored.
    pub fn min_rating(mut self, min: Option<f64>) -> Self {
        if let Some(min) = min.filter(|v| v.is_finite()) {
            self.chain.add(RatingFilter::new(min));
        }
        self
    }

    /// Adds a featured filter; `Some(false)` keeps only non-featured products.
    pub fn featured(mut self, featured: Option<bool>) -> Self {
        if let Some(featured) = featured {
            self.chain.add(FeaturedFilter::new(featured));
        }
        self
    }

    /// Adds an in-stock filter.
    pub fn in_stock(mut self, enabled: bool) -> Self {
        if enabled {
            self.chain.add(StockFilter::new());
        }
        self
    }

    /// Adds a vendor filter.
    pub fn vendor(mut self, vendor: Option<&str>) -> Self {
        if let Some(vendor) = vendor {
            self.chain.add(VendorFilter::new(vendor));
        }
        self
    }

    /// Adds an any-of tag filter.
    pub fn tags(mut self, tags: &[String]) -> Self {
        if !tags.is_empty() {
            self.chain.add(TagFilter::new(tags.to_vec()));
        }
        self
    }

    /// Adds a free-text search filter.
    pub fn text(mut self, term: &str) -> Self {
        self.chain.add(TextFilter::new(term));
        self
    }

    /// Builds the filter chain.
    pub fn build(self) -> FilterChain {
        self.chain
    }
}

impl Default for FilterChainBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter on the featured flag.
pub struct FeaturedFilter {
    featured: bool,
}

impl FeaturedFilter {
    pub fn new(featured: bool) -> Self {
        Self { featured }
    }
}

impl Filter for FeaturedFilter {
    fn matches(&self, product: &Product) -> bool {
        product.featured == self.featured
    }

    fn description(&self) -> String {
        let label = if self.featured { "Featured only" } else { "Not featured" };
        label.to_string()
    }
}

/// Filter that excludes products with no stock.
pub struct StockFilter;

impl StockFilter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StockFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StockFilter {
    fn matches(&self, product: &Product) -> bool {
        product.in_stock()
    }

    fn description(&self) -> String {
        "In stock".to_string()
    }
}

/// Filter on exact vendor id.
pub struct VendorFilter {
    vendor_id: String,
}

impl VendorFilter {
    pub fn new(vendor_id: impl Into<String>) -> Self {
        Self { vendor_id: vendor_id.into() }
    }
}

impl Filter for VendorFilter {
    fn matches(&self, product: &Product) -> bool {
        product.vendor.id == self.vendor_id
    }

    fn description(&self) -> String {
        format!("Vendor: {}", self.vendor_id)
    }
}
