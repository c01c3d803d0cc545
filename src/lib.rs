//! storefront-catalog - product catalog queries for a multi-vendor storefront
//!
//! Filter, sort, paginate, and search an in-memory product catalog, and keep
//! shopping carts against it.

pub mod cart;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod filters;
pub mod format;
pub mod query;
pub mod service;

pub use cart::{CartStore, CartSummary};
pub use catalog::{Catalog, Category, Product};
pub use config::Config;
pub use error::CatalogError;
pub use query::{QueryEngine, QuerySpec, ResultPage, SortKey, SortOrder};
pub use service::{CatalogService, ProductSource};
