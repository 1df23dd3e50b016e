//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export CATALOG_PATH="resources/catalog.json"
//! export BOOKS_DIR="resources/books"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CATALOG_PATH` - Catalog JSON file (default: `resources/catalog.json`)
//! - `BOOKS_DIR` - Directory holding downloadable book files (default: `resources/books`)
//! - `TRENDING_DEFAULT_COUNT` - Trending list size when `max_count` is omitted (default: 10, 1-1000)
//! - `DOWNLOAD_REQUIRES_RECEIPT` - Require a purchase receipt to download (default: `true`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

const MAX_TRENDING_DEFAULT_COUNT: usize = 1000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// JSON file the catalog is loaded from at startup.
    pub catalog_path: PathBuf,
    /// Directory book files are served from.
    pub books_dir: PathBuf,
    pub trending_default_count: usize,
    /// When false, any catalog book can be downloaded without a receipt.
    pub download_requires_receipt: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `TRENDING_DEFAULT_COUNT` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let catalog_path = env::var("CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("resources/catalog.json"));

        let books_dir = env::var("BOOKS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("resources/books"));

        let trending_default_count = match env::var("TRENDING_DEFAULT_COUNT") {
            Ok(value) => value.trim().parse().map_err(|_| {
                anyhow::anyhow!("TRENDING_DEFAULT_COUNT must be a positive integer, got '{value}'")
            })?,
            Err(_) => 10,
        };

        let download_requires_receipt = env::var("DOWNLOAD_REQUIRES_RECEIPT")
            .map(|v| !(v.eq_ignore_ascii_case("false") || v == "0"))
            .unwrap_or(true);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            catalog_path,
            books_dir,
            trending_default_count,
            download_requires_receipt,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `trending_default_count` is outside 1-1000
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.trending_default_count == 0
            || self.trending_default_count > MAX_TRENDING_DEFAULT_COUNT
        {
            anyhow::bail!(
                "TRENDING_DEFAULT_COUNT must be between 1 and {}, got {}",
                MAX_TRENDING_DEFAULT_COUNT,
                self.trending_default_count
            );
        }

        if self.catalog_path.as_os_str().is_empty() {
            anyhow::bail!("CATALOG_PATH must not be empty");
        }

        if self.books_dir.as_os_str().is_empty() {
            anyhow::bail!("BOOKS_DIR must not be empty");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Catalog: {}", self.catalog_path.display());
        tracing::info!("  Books directory: {}", self.books_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Trending default count: {}", self.trending_default_count);

        if self.download_requires_receipt {
            tracing::info!("  Downloads: receipt required");
        } else {
            tracing::warn!("  Downloads: open to anyone (DOWNLOAD_REQUIRES_RECEIPT=false)");
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
