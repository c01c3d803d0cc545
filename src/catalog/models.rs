//! Data models for catalog products, vendors, variants, and shipping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A product listed in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Long-form description
    pub description: String,
    /// Current selling price
    pub price: f64,
    /// Compare-at price shown struck through when on sale
    #[serde(rename = "comparePrice", default, skip_serializing_if = "Option::is_none")]
    pub compare_price: Option<f64>,
    /// Image references, primary image first
    #[serde(default)]
    pub images: Vec<String>,
    /// Category the product is listed under
    pub category: Category,
    /// Vendor selling the product
    pub vendor: Vendor,
    /// Units available
    pub stock_quantity: u32,
    /// Average review score (0.0 - 5.0)
    #[serde(rename = "averageRating")]
    pub average_rating: f64,
    /// Number of reviews
    #[serde(rename = "totalReviews")]
    pub total_reviews: u32,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the product is promoted on the home page
    #[serde(default)]
    pub featured: bool,
    /// Technical specifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specifications: Option<BTreeMap<String, String>>,
    /// Selectable option groups
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<Variant>>,
    /// Shipping terms
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<Shipping>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns true if at least one unit is available.
    pub fn in_stock(&self) -> bool {
        self.stock_quantity > 0
    }

    /// Returns discount percentage relative to the compare-at price.
    pub fn discount_percent(&self) -> Option<u8> {
        self.compare_price.filter(|orig| *orig > self.price && *orig > 0.0).map(|orig| {
            let discount = ((orig - self.price) / orig * 100.0).round() as u8;
            discount.min(99)
        })
    }

    /// Returns true if the product carries this exact tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Returns the variant with the given id, if any.
    pub fn variant(&self, id: &str) -> Option<&Variant> {
        self.variants.as_deref().and_then(|variants| variants.iter().find(|v| v.id == id))
    }
}

/// Category reference carried by each product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into() }
    }
}

/// Vendor summary carried by each product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    /// Seller rating (0.0 - 5.0)
    pub rating: f64,
    pub verified: bool,
}

/// A named option group such as color or storage size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub id: String,
    pub name: String,
    pub options: Vec<String>,
    /// Price delta applied when a non-default option is chosen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_modifier: Option<f64>,
}

/// Shipping terms for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shipping {
    pub free: bool,
    pub cost: f64,
    #[serde(rename = "estimatedDays")]
    pub estimated_days: u32,
}
