//! Browse command: filtered, sorted, paginated listing.

use super::open_service;
use crate::config::Config;
use crate::format::Formatter;
use crate::query::QuerySpec;
use crate::service::ProductSource;
use anyhow::Result;
use tracing::info;

/// Lists catalog products matching a query.
pub struct BrowseCommand {
    config: Config,
}

impl BrowseCommand {
    /// Creates a new browse command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Runs the query and returns formatted output.
    pub async fn execute(&self, spec: &QuerySpec) -> Result<String> {
        let service = open_service(&self.config)?;
        self.execute_with_source(&service, spec).await
    }

    /// Runs the query against a provided source (for testing).
    pub async fn execute_with_source(
        &self,
        source: &impl ProductSource,
        spec: &QuerySpec,
    ) -> Result<String> {
        info!("Browsing page {} ({} per page)", spec.page, spec.page_size);

        let page = source.products(spec).await;
        info!("Found {} products matching criteria", page.total);

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_page(&page))
    }

    /// Lists featured products.
    pub async fn featured(&self) -> Result<String> {
        let service = open_service(&self.config)?;
        self.featured_with_source(&service).await
    }

    /// Lists featured products from a provided source.
    pub async fn featured_with_source(&self, source: &impl ProductSource) -> Result<String> {
        let products = source.featured().await;
        Ok(Formatter::new(self.config.format).format_products(&products))
    }

    /// Lists distinct categories.
    pub async fn categories(&self) -> Result<String> {
        let service = open_service(&self.config)?;
        self.categories_with_source(&service).await
    }

    /// Lists categories from a provided source.
    pub async fn categories_with_source(&self, source: &impl ProductSource) -> Result<String> {
        let categories = source.categories().await;
        Ok(Formatter::new(self.config.format).format_categories(&categories))
    }
}
