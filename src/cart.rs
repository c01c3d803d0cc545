//! Shopping cart store.
//!
//! Each cart is an explicitly constructed value, so callers and tests own
//! independent instances. Lines snapshot the catalog product when added.

use crate::catalog::{Catalog, Product};
use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One product + variant entry in the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub product: Product,
    pub quantity: u32,
    pub selected_variant: Option<String>,
}

impl CartLine {
    /// Returns price × quantity.
    pub fn subtotal(&self) -> f64 {
        self.product.price * f64::from(self.quantity)
    }
}

/// Cart contents with totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartSummary {
    pub items: Vec<CartLine>,
    /// Sum of line quantities
    pub total_items: u32,
    /// Sum of line subtotals
    pub total_price: f64,
}

/// In-memory cart.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
    next_line: u64,
}

impl CartStore {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, merging into an existing line with the same variant.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        product_id: &str,
        quantity: u32,
        variant: Option<&str>,
    ) -> Result<(), CatalogError> {
        if quantity == 0 {
            return Err(CatalogError::InvalidQuantity);
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.product.id == product_id && l.selected_variant.as_deref() == variant)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            debug!("Cart line {} now has quantity {}", line.id, line.quantity);
            return Ok(());
        }

        let product = catalog.engine().get_by_id(product_id)?.clone();
        self.next_line += 1;
        let line = CartLine {
            id: format!("cart_{}", self.next_line),
            product,
            quantity,
            selected_variant: variant.map(str::to_string),
        };
        debug!("Added cart line {} for {}", line.id, product_id);
        self.lines.push(line);

        Ok(())
    }

    /// Sets the quantity of the first line for a product. Zero removes it.
    ///
    /// Unknown products are ignored.
    pub fn update_quantity(&mut self, product_id: &str, quantity: u32) {
        let Some(index) = self.position(product_id) else {
            return;
        };

        if quantity == 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = quantity;
        }
    }

    /// Removes the first line for a product, if any.
    pub fn remove(&mut self, product_id: &str) {
        if let Some(index) = self.position(product_id) {
            self.lines.remove(index);
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Returns the cart lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Returns true if the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Returns the lines and their totals.
    pub fn summary(&self) -> CartSummary {
        CartSummary {
            items: self.lines.clone(),
            total_items: self.lines.iter().map(|l| l.quantity).sum(),
            total_price: self.lines.iter().map(CartLine::subtotal).sum(),
        }
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.lines.iter().position(|l| l.product.id == product_id)
    }
}
