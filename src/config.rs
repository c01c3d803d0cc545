//! Configuration management with TOML, environment variables, and CLI overrides.

use crate::query::{DEFAULT_PAGE_SIZE, DEFAULT_RELATED_LIMIT};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration with layered loading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// JSON catalog file; the demo catalog is used when unset
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Products per page when a command does not say otherwise
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Simulated latency per catalog call in milliseconds
    #[serde(default)]
    pub latency_ms: u64,

    /// Random jitter added to latency (0 to this value)
    #[serde(default)]
    pub latency_jitter_ms: u64,

    /// Maximum related products shown with a product
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_related_limit() -> usize {
    DEFAULT_RELATED_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            page_size: default_page_size(),
            latency_ms: 0,
            latency_jitter_ms: 0,
            related_limit: default_related_limit(),
            format: OutputFormat::Table,
        }
    }
}

impl Config {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from: {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Loads configuration with fallback to default locations.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let local_config = Path::new("storefront.toml");
        if local_config.exists() {
            debug!("Found storefront.toml in current directory");
            return Self::from_file(local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("storefront").join("config.toml");
            if xdg_config.exists() {
                debug!("Found config in XDG config directory");
                return Self::from_file(xdg_config);
            }
        }

        debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Applies environment variable overrides. Unparseable values are ignored.
    pub fn with_env(mut self) -> Self {
        if let Ok(path) = std::env::var("STOREFRONT_CATALOG") {
            if !path.trim().is_empty() {
                self.catalog_path = Some(PathBuf::from(path));
            }
        }

        if let Ok(size) = std::env::var("STOREFRONT_PAGE_SIZE") {
            if let Ok(s) = size.parse() {
                self.page_size = s;
            }
        }

        if let Ok(latency) = std::env::var("STOREFRONT_LATENCY") {
            if let Ok(l) = latency.parse() {
                self.latency_ms = l;
            }
        }

        self
    }
}

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Markdown,
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use: table, json, markdown, csv", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}
