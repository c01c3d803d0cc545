//! Product lookup command implementation.

use super::open_service;
use crate::catalog::Product;
use crate::config::Config;
use crate::format::Formatter;
use crate::service::ProductSource;
use anyhow::Result;
use tracing::{info, warn};

/// Executes product lookups by id.
pub struct ProductCommand {
    config: Config,
}

impl ProductCommand {
    /// Creates a new product command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Fetches a product with its related products and returns formatted output.
    pub async fn execute(&self, id: &str) -> Result<String> {
        let service = open_service(&self.config)?;
        self.execute_with_source(&service, id).await
    }

    /// Fetches a product with a provided source (for testing).
    pub async fn execute_with_source(&self, source: &impl ProductSource, id: &str) -> Result<String> {
        let id = id.trim();
        info!("Looking up product: {}", id);

        let product = source.product(id).await?;
        let related = source.related(id, self.config.related_limit).await;

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_product(&product, &related))
    }

    /// Fetches multiple products by id.
    pub async fn execute_batch(&self, ids: &[String]) -> Result<String> {
        let service = open_service(&self.config)?;
        self.execute_batch_with_source(&service, ids).await
    }

    /// Fetches multiple products with a provided source. Unknown ids are skipped.
    pub async fn execute_batch_with_source(
        &self,
        source: &impl ProductSource,
        ids: &[String],
    ) -> Result<String> {
        let mut products: Vec<Product> = Vec::new();

        for id in ids {
            let id = id.trim();
            match source.product(id).await {
                Ok(product) => products.push(product),
                Err(e) => warn!("Skipping {}: {}", id, e),
            }
        }

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_products(&products))
    }

    /// Lists products related to the given one.
    pub async fn related(&self, id: &str) -> Result<String> {
        let service = open_service(&self.config)?;
        self.related_with_source(&service, id).await
    }

    /// Lists related products from a provided source.
    pub async fn related_with_source(&self, source: &impl ProductSource, id: &str) -> Result<String> {
        let id = id.trim();
        // Surface a missing product as an error instead of an empty list
        source.product(id).await?;

        let related = source.related(id, self.config.related_limit).await;
        Ok(Formatter::new(self.config.format).format_products(&related))
    }
}
