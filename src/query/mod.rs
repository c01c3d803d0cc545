//! Query requests, sort options, and result pages.

pub mod engine;

pub use engine::QueryEngine;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Default number of products per page.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Default number of related products returned for a product.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// A filter + sort + pagination request.
///
/// Every filter is optional; an unset field places no constraint on results.
/// `page` and `page_size` are clamped to at least 1 when the query runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuerySpec {
    pub page: usize,
    pub page_size: usize,
    /// Category id, or a case-insensitive fragment of the category name
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
    /// `Some(true)` keeps featured products, `Some(false)` keeps the rest
    pub featured: Option<bool>,
    pub in_stock: bool,
    /// Exact vendor id
    pub vendor: Option<String>,
    /// Products carrying any of these tags pass
    pub tags: Vec<String>,
    pub sort_by: Option<SortKey>,
    pub sort_order: SortOrder,
}

impl Default for QuerySpec {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            category: None,
            min_price: None,
            max_price: None,
            min_rating: None,
            featured: None,
            in_stock: false,
            vendor: None,
            tags: Vec::new(),
            sort_by: None,
            sort_order: SortOrder::Asc,
        }
    }
}

impl QuerySpec {
    /// Creates an unfiltered request for one page.
    pub fn page(page: usize, page_size: usize) -> Self {
        Self { page, page_size, ..Self::default() }
    }

    /// Sets the sort key and direction.
    pub fn sorted_by(mut self, key: SortKey, order: SortOrder) -> Self {
        self.sort_by = Some(key);
        self.sort_order = order;
        self
    }

    /// Returns the page number clamped to at least 1.
    pub fn effective_page(&self) -> usize {
        self.page.max(1)
    }

    /// Returns the page size clamped to at least 1.
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// Field to order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Price,
    Rating,
    Name,
    CreatedAt,
}

impl std::str::FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "price" => Ok(SortKey::Price),
            "rating" => Ok(SortKey::Rating),
            "name" => Ok(SortKey::Name),
            "created_at" | "created" | "newest" => Ok(SortKey::CreatedAt),
            _ => Err(format!("Unknown sort key: {}. Use: price, rating, name, created_at", s)),
        }
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortKey::Price => write!(f, "price"),
            SortKey::Rating => write!(f, "rating"),
            SortKey::Name => write!(f, "name"),
            SortKey::CreatedAt => write!(f, "created_at"),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Orients an ascending comparison result.
    pub fn apply(self, ordering: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {}. Use: asc, desc", s)),
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// One page of query results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultPage {
    /// Products on this page, in result order
    pub products: Vec<Product>,
    /// Number of matches before pagination
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    /// `ceil(total / page_size)`, zero when nothing matched
    pub total_pages: usize,
}

impl ResultPage {
    /// Creates an empty page.
    pub fn empty(page: usize, page_size: usize) -> Self {
        Self { products: Vec::new(), total: 0, page, page_size, total_pages: 0 }
    }

    /// Returns number of products on this page.
    pub fn count(&self) -> usize {
        self.products.len()
    }

    /// Returns true if this page holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Returns true if later pages exist.
    pub fn has_more(&self) -> bool {
        self.page < self.total_pages
    }
}
