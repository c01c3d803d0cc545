//! Error types for catalog and cart operations.

use thiserror::Error;

/// Errors raised by the catalog, the query engine, and the cart store.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    /// No product with this id exists in the catalog.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Two products in one catalog share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateId(String),

    /// A product record violates a catalog invariant.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: String, reason: String },

    /// Cart quantities must be at least one when adding.
    #[error("Quantity must be at least 1")]
    InvalidQuantity,
}

impl CatalogError {
    /// Returns true for lookup misses.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}
