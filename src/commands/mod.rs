//! CLI command implementations.

pub mod browse;
pub mod product;
pub mod search;

pub use browse::BrowseCommand;
pub use product::ProductCommand;
pub use search::SearchCommand;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::service::CatalogService;
use anyhow::{Context, Result};
use std::sync::Arc;

/// Loads the configured catalog and wraps it in a service.
pub fn open_service(config: &Config) -> Result<CatalogService> {
    let catalog =
        Catalog::load(config.catalog_path.as_deref()).context("Failed to load catalog")?;
    Ok(CatalogService::with_config(Arc::new(catalog), config))
}
