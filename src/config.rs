//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::cache::{DEFAULT_MAX_SIZE, DEFAULT_TTL_SECONDS};
use crate::catalog::{CatalogColumns, DEFAULT_ARTICLE_COLUMN, DEFAULT_CUSTOMER_COLUMN};
use crate::error::{Result, ValidatorError};

/// Service configuration parameters.
///
/// Everything but the catalog path has a default.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// CSV export of the catalog sheet
    pub catalog_path: PathBuf,
    /// Header names of the customer and article columns
    pub catalog_columns: CatalogColumns,
    /// Maximum number of cached lookups
    pub cache_max_size: usize,
    /// Sliding expiration of cached lookups in seconds
    pub cache_ttl_seconds: u64,
    /// HTTP bind host, an IP literal or a resolvable hostname
    pub server_host: String,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CATALOG_PATH` - Catalog CSV file (required)
    /// - `CATALOG_CUSTOMER_COLUMN` - Customer code header (default: `Código SN`)
    /// - `CATALOG_ARTICLE_COLUMN` - Article code header (default: `Nº catálogo SN`)
    /// - `CACHE_MAX_SIZE` - Maximum cached lookups (default: 1000)
    /// - `CACHE_TTL_SECONDS` - Lookup TTL in seconds (default: 3600)
    /// - `SERVER_HOST` - Bind address (default: 0.0.0.0)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let catalog_path = lookup("CATALOG_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| {
                ValidatorError::Configuration("CATALOG_PATH is not set".to_string())
            })?;

        let catalog_columns = CatalogColumns::new(
            lookup("CATALOG_CUSTOMER_COLUMN").unwrap_or(defaults.catalog_columns.customer),
            lookup("CATALOG_ARTICLE_COLUMN").unwrap_or(defaults.catalog_columns.article),
        );

        let cache_max_size = parse_var(&lookup, "CACHE_MAX_SIZE", defaults.cache_max_size)?;
        let cache_ttl_seconds =
            parse_var(&lookup, "CACHE_TTL_SECONDS", defaults.cache_ttl_seconds)?;
        if cache_max_size == 0 {
            return Err(ValidatorError::Configuration(
                "CACHE_MAX_SIZE must be positive".to_string(),
            ));
        }
        if cache_ttl_seconds == 0 {
            return Err(ValidatorError::Configuration(
                "CACHE_TTL_SECONDS must be positive".to_string(),
            ));
        }

        Ok(Self {
            catalog_path,
            catalog_columns,
            cache_max_size,
            cache_ttl_seconds,
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: parse_var(&lookup, "SERVER_PORT", defaults.server_port)?,
        })
    }

    /// Host and port in a form `TcpListener::bind` resolves.
    pub fn listen_addr(&self) -> (&str, u16) {
        (self.server_host.as_str(), self.server_port)
    }
}

/// Parses an optional variable, falling back to `default` when unset.
fn parse_var<F, T>(lookup: &F, name: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        Some(raw) => raw.trim().parse().map_err(|_| {
            ValidatorError::Configuration(format!("{} has an invalid value: {:?}", name, raw))
        }),
        None => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.csv"),
            catalog_columns: CatalogColumns::new(DEFAULT_CUSTOMER_COLUMN, DEFAULT_ARTICLE_COLUMN),
            cache_max_size: DEFAULT_MAX_SIZE,
            cache_ttl_seconds: DEFAULT_TTL_SECONDS,
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
        }
    }
}
