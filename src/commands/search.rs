//! Search command implementation.

use super::open_service;
use crate::config::Config;
use crate::format::Formatter;
use crate::service::ProductSource;
use anyhow::Result;
use tracing::info;

/// Executes a free-text product search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, query: &str, page: usize) -> Result<String> {
        let service = open_service(&self.config)?;
        self.execute_with_source(&service, query, page).await
    }

    /// Executes the search with a provided source (for testing).
    pub async fn execute_with_source(
        &self,
        source: &impl ProductSource,
        query: &str,
        page: usize,
    ) -> Result<String> {
        info!("Searching for: {}", query);

        let results = source.search(query, page, self.config.page_size).await;
        info!("Found {} products matching \"{}\"", results.total, query.trim());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_page(&results))
    }
}
