//! Catalog Index Module
//!
//! Composite-key lookup over the catalog rows.
//!
//! Keys are `normalize_customer(customer) + "|" + normalize_article(article)`.
//! Customer codes are upper-cased and article codes lower-cased. The casing
//! differs on purpose and both sides of every lookup must use these helpers.

use std::collections::HashMap;

use tracing::{info, warn};

use crate::catalog::{CatalogRecord, CatalogTable};
use crate::error::{Result, ValidatorError};

/// Separator between the customer and article parts of a key
pub const KEY_SEPARATOR: char = '|';

/// Default header of the customer code column
pub const DEFAULT_CUSTOMER_COLUMN: &str = "Código SN";

/// Default header of the article code column
pub const DEFAULT_ARTICLE_COLUMN: &str = "Nº catálogo SN";

/// Trims and upper-cases a customer code.
pub fn normalize_customer(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Trims and lower-cases an article code.
pub fn normalize_article(code: &str) -> String {
    code.trim().to_lowercase()
}

/// Builds the lookup key for a customer and article pair.
pub fn lookup_key(customer: &str, article: &str) -> String {
    format!(
        "{}{}{}",
        normalize_customer(customer),
        KEY_SEPARATOR,
        normalize_article(article)
    )
}

// == Catalog Columns ==
/// Header names of the two required catalog columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogColumns {
    pub customer: String,
    pub article: String,
}

impl CatalogColumns {
    pub fn new(customer: impl Into<String>, article: impl Into<String>) -> Self {
        Self {
            customer: customer.into(),
            article: article.into(),
        }
    }
}

impl Default for CatalogColumns {
    fn default() -> Self {
        Self::new(DEFAULT_CUSTOMER_COLUMN, DEFAULT_ARTICLE_COLUMN)
    }
}

// == Catalog Index ==
/// Read-only index from composite key to catalog record.
///
/// Duplicate keys resolve to the last row carrying them.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    /// Every row in source order
    records: Vec<CatalogRecord>,
    /// Composite key of each row, parallel to `records`
    keys: Vec<String>,
    /// Composite key to position in `records`
    by_key: HashMap<String, usize>,
}

impl CatalogIndex {
    // == Build ==
    /// Builds the index from a loaded catalog table.
    ///
    /// Fails with a configuration error when the table has no data rows or
    /// either required column is missing.
    pub fn build(table: &CatalogTable, columns: &CatalogColumns) -> Result<Self> {
        if table.rows.is_empty() {
            return Err(ValidatorError::Configuration(
                "catalog is empty or has no data rows".to_string(),
            ));
        }

        let missing: Vec<&str> = [columns.customer.as_str(), columns.article.as_str()]
            .into_iter()
            .filter(|name| table.column_index(name).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ValidatorError::Configuration(format!(
                "missing catalog columns: {:?}",
                missing
            )));
        }

        // Both present, checked above
        let customer_idx = table.column_index(&columns.customer).unwrap_or_default();
        let article_idx = table.column_index(&columns.article).unwrap_or_default();

        let mut records = Vec::with_capacity(table.rows.len());
        let mut keys = Vec::with_capacity(table.rows.len());
        let mut by_key = HashMap::with_capacity(table.rows.len());

        for (position, row) in table.rows.iter().enumerate() {
            let record = CatalogRecord::from_row(&table.headers, row, customer_idx, article_idx);
            let key = lookup_key(&record.customer_code, &record.article_code);

            by_key.insert(key.clone(), position);
            keys.push(key);
            records.push(record);
        }

        let duplicates = records.len() - by_key.len();
        if duplicates > 0 {
            warn!(
                "Catalog has {} rows with a repeated key; the last row wins",
                duplicates
            );
        }
        info!("Catalog index built with {} unique keys", by_key.len());

        Ok(Self {
            records,
            keys,
            by_key,
        })
    }

    // == Lookup ==
    /// Finds the record for an already normalized composite key.
    pub fn get(&self, key: &str) -> Option<&CatalogRecord> {
        self.by_key.get(key).map(|&position| &self.records[position])
    }

    /// Finds the record for a raw customer and article pair.
    pub fn find(&self, customer: &str, article: &str) -> Option<&CatalogRecord> {
        self.get(&lookup_key(customer, article))
    }

    /// Number of catalog rows, duplicates included.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Number of distinct composite keys.
    pub fn key_count(&self) -> usize {
        self.by_key.len()
    }

    /// First `n` rows in source order.
    pub fn head(&self, n: usize) -> &[CatalogRecord] {
        &self.records[..n.min(self.records.len())]
    }

    /// First `n` composite keys in source order.
    pub fn head_keys(&self, n: usize) -> &[String] {
        &self.keys[..n.min(self.keys.len())]
    }
}
