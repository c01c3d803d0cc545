//! Async product source over a catalog, with optional simulated latency.

use crate::catalog::{Catalog, Category, Product};
use crate::config::Config;
use crate::error::CatalogError;
use crate::query::{QuerySpec, ResultPage};
use async_trait::async_trait;
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Trait for product lookups - enables mocking for tests.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Filters, sorts, and paginates products.
    async fn products(&self, spec: &QuerySpec) -> ResultPage;

    /// Fetches a product by id.
    async fn product(&self, id: &str) -> Result<Product, CatalogError>;

    /// Lists featured products.
    async fn featured(&self) -> Vec<Product>;

    /// Lists up to `limit` products related to the given one.
    async fn related(&self, id: &str, limit: usize) -> Vec<Product>;

    /// Runs a free-text search.
    async fn search(&self, text: &str, page: usize, page_size: usize) -> ResultPage;

    /// Lists distinct categories.
    async fn categories(&self) -> Vec<Category>;
}

/// Serves products from an in-memory catalog.
pub struct CatalogService {
    catalog: Arc<Catalog>,
    latency_ms: u64,
    latency_jitter_ms: u64,
}

impl CatalogService {
    /// Creates a service that answers immediately.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog, latency_ms: 0, latency_jitter_ms: 0 }
    }

    /// Creates a service using the latency settings from configuration.
    pub fn with_config(catalog: Arc<Catalog>, config: &Config) -> Self {
        Self { catalog, latency_ms: config.latency_ms, latency_jitter_ms: config.latency_jitter_ms }
    }

    /// Updates the simulated latency.
    pub fn set_latency(&mut self, latency_ms: u64, jitter_ms: u64) {
        self.latency_ms = latency_ms;
        self.latency_jitter_ms = jitter_ms;
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sleeps for the configured latency plus random jitter.
    async fn delay(&self) {
        if self.latency_ms == 0 && self.latency_jitter_ms == 0 {
            return;
        }

        let jitter = if self.latency_jitter_ms > 0 {
            rand::rng().random_range(0..=self.latency_jitter_ms)
        } else {
            0
        };

        let total_delay = self.latency_ms + jitter;
        debug!("Simulating {}ms latency", total_delay);
        tokio::time::sleep(Duration::from_millis(total_delay)).await;
    }
}

#[async_trait]
impl ProductSource for CatalogService {
    async fn products(&self, spec: &QuerySpec) -> ResultPage {
        self.delay().await;
        self.catalog.engine().query(spec)
    }

    async fn product(&self, id: &str) -> Result<Product, CatalogError> {
        self.delay().await;
        info!("Fetching product: {}", id);
        self.catalog.engine().get_by_id(id).cloned()
    }

    async fn featured(&self) -> Vec<Product> {
        self.delay().await;
        self.catalog.engine().featured().into_iter().cloned().collect()
    }

    async fn related(&self, id: &str, limit: usize) -> Vec<Product> {
        self.delay().await;
        self.catalog.engine().get_related(id, limit).into_iter().cloned().collect()
    }

    async fn search(&self, text: &str, page: usize, page_size: usize) -> ResultPage {
        self.delay().await;
        info!("Searching: {} (page {})", text, page);
        self.catalog.engine().search(text, page, page_size)
    }

    async fn categories(&self) -> Vec<Category> {
        self.delay().await;
        self.catalog.engine().categories().into_iter().cloned().collect()
    }
}

impl Default for CatalogService {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::demo()))
    }
}
