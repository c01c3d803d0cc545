//! storefront - query a storefront product catalog from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storefront_catalog::commands::{BrowseCommand, ProductCommand, SearchCommand};
use storefront_catalog::config::{Config, OutputFormat};
use storefront_catalog::query::{QuerySpec, SortKey, SortOrder};
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "storefront",
    version,
    about = "Browse and search a storefront product catalog",
    long_about = "Filter, sort, paginate, and search products from a JSON catalog file or the built-in demo catalog."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON catalog file (defaults to the demo catalog)
    #[arg(long, global = true, env = "STOREFRONT_CATALOG")]
    catalog: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Simulated latency per catalog call in milliseconds
    #[arg(long, global = true)]
    latency: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products with filters, sorting, and pagination
    #[command(alias = "b")]
    Browse {
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Products per page
        #[arg(long)]
        page_size: Option<usize>,

        /// Category id or name fragment
        #[arg(long)]
        category: Option<String>,

        /// Minimum price filter
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum price filter
        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum average rating (0.0-5.0)
        #[arg(long)]
        min_rating: Option<f64>,

        /// Only featured products
        #[arg(long)]
        featured: bool,

        /// Only products in stock
        #[arg(long)]
        in_stock: bool,

        /// Vendor id
        #[arg(long)]
        vendor: Option<String>,

        /// Tags, any of which must be present (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Sort key: price, rating, name, created_at
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort order: asc, desc
        #[arg(long, default_value = "asc")]
        order: SortOrder,
    },

    /// Search products by name, description, tag, or category
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Products per page
        #[arg(long)]
        page_size: Option<usize>,
    },

    /// Look up products by id
    #[command(alias = "p")]
    Product {
        /// Product id(s) to look up
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// List products in the same category as a product
    Related {
        /// Product id
        id: String,

        /// Maximum number of related products
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// List featured products
    Featured,

    /// List catalog categories
    Categories,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    // Apply CLI overrides
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }
    if let Some(format) = cli.format {
        config.format = format;
    }
    if let Some(latency) = cli.latency {
        config.latency_ms = latency;
    }

    match cli.command {
        Commands::Browse {
            page,
            page_size,
            category,
            min_price,
            max_price,
            min_rating,
            featured,
            in_stock,
            vendor,
            tags,
            sort,
            order,
        } => {
            let spec = QuerySpec {
                page,
                page_size: page_size.unwrap_or(config.page_size),
                category,
                min_price,
                max_price,
                min_rating,
                featured: featured.then_some(true),
                in_stock,
                vendor,
                tags: tags.unwrap_or_default(),
                sort_by: sort,
                sort_order: order,
            };

            let cmd = BrowseCommand::new(config);
            let output = cmd.execute(&spec).await?;
            println!("{}", output);
        }

        Commands::Search { query, page, page_size } => {
            if let Some(size) = page_size {
                config.page_size = size;
            }

            let cmd = SearchCommand::new(config);
            let output = cmd.execute(&query, page).await?;
            println!("{}", output);
        }

        Commands::Product { ids } => {
            let cmd = ProductCommand::new(config);

            let output = if ids.len() == 1 {
                cmd.execute(&ids[0]).await?
            } else {
                cmd.execute_batch(&ids).await?
            };

            println!("{}", output);
        }

        Commands::Related { id, limit } => {
            if let Some(limit) = limit {
                config.related_limit = limit;
            }

            let cmd = ProductCommand::new(config);
            let output = cmd.related(&id).await?;
            println!("{}", output);
        }

        Commands::Featured => {
            let cmd = BrowseCommand::new(config);
            let output = cmd.featured().await?;
            println!("{}", output);
        }

        Commands::Categories => {
            let cmd = BrowseCommand::new(config);
            let output = cmd.categories().await?;
            println!("{}", output);
        }
    }

    Ok(())
}
