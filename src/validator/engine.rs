//! Order validation engine
//!
//! Checks every line of a purchase order against the catalog index, using an
//! expiring cache to remember the outcome per (customer, article) pair.

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, ExpiringCache};
use crate::catalog::{
    normalize_article, normalize_customer, CatalogColumns, CatalogIndex, CatalogRecord,
    CatalogSource, CatalogTable, KEY_SEPARATOR,
};
use crate::error::{Result, ValidatorError};
use crate::validator::{MissingItem, OrderItem, PurchaseOrder, ValidationReport};

/// Prefix of every cache key written by the validator
pub const CACHE_KEY_PREFIX: &str = "validation_";

/// Remembered result of one catalog lookup
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// The pair exists; holds the matched catalog row
    Found(CatalogRecord),
    /// The pair does not exist; holds the reason reported to the caller
    Missing(String),
}

impl LookupOutcome {
    pub fn exists(&self) -> bool {
        matches!(self, LookupOutcome::Found(_))
    }
}

/// Cache type owned by the validator
pub type LookupCache = ExpiringCache<String, LookupOutcome>;

/// Reason reported for an order line missing from the catalog.
pub fn missing_reason(customer: &str, code: &str) -> String {
    format!(
        "Cliente [{}] + Articulo [{}] no existe en el catalogo",
        customer, code
    )
}

// == Order Validator ==
/// Validates purchase orders against an immutable catalog index.
///
/// The index is read-only after construction. The cache is the only mutable
/// state and every access to it goes through a mutex, so one validator can
/// serve concurrent requests behind an `Arc`.
#[derive(Debug)]
pub struct OrderValidator {
    index: CatalogIndex,
    cache: Mutex<LookupCache>,
}

impl OrderValidator {
    // == Constructor ==
    /// Builds a validator from a loaded catalog table and the cache it will own.
    ///
    /// Fails with a configuration error when the catalog has no data rows or
    /// lacks a required column.
    pub fn new(table: &CatalogTable, columns: &CatalogColumns, cache: LookupCache) -> Result<Self> {
        let index = CatalogIndex::build(table, columns)?;
        info!("Order validator ready: {} catalog rows", index.row_count());

        Ok(Self {
            index,
            cache: Mutex::new(cache),
        })
    }

    /// Loads the catalog from `source`, then builds the validator.
    pub fn from_source(
        source: &dyn CatalogSource,
        columns: &CatalogColumns,
        cache: LookupCache,
    ) -> Result<Self> {
        let table = source.load()?;
        Self::new(&table, columns, cache)
    }

    // == Validate ==
    /// Validates every line of `order`, in order.
    ///
    /// Returns a validation error only when the order has no items.
    pub fn validate(&self, order: &PurchaseOrder) -> Result<ValidationReport> {
        let customer = normalize_customer(&order.buyer.nit);
        info!(
            "Validating order {} for customer {} with {} items",
            order.order_id,
            customer,
            order.items.len()
        );

        if order.items.is_empty() {
            warn!("Order {} has no items", order.order_id);
            return Err(ValidatorError::Validation(
                "order must have at least one item".to_string(),
            ));
        }

        let mut found: Vec<OrderItem> = Vec::new();
        let mut missing: Vec<MissingItem> = Vec::new();

        for (position, item) in order.items.iter().enumerate() {
            debug!(
                "Looking up item {}/{}: {} for customer {}",
                position + 1,
                order.items.len(),
                item.code,
                customer
            );

            match self.lookup(&customer, item) {
                LookupOutcome::Found(_) => found.push(item.clone()),
                LookupOutcome::Missing(reason) => missing.push(MissingItem::new(item, reason)),
            }
        }

        let report = ValidationReport::new(&order.order_id, customer, found, missing);
        info!(
            "Validation complete: {}/{} items found",
            report.summary.found_items, report.summary.total_items
        );
        if report.all_items_exist {
            info!("All items exist, order {} can proceed", report.order_id);
        } else {
            warn!(
                "{} items missing, order {} cannot proceed",
                report.summary.missing_items, report.order_id
            );
        }

        Ok(report)
    }

    /// Resolves one order line, from the cache when possible.
    ///
    /// The cache lock is held across the read and the write-back so a miss
    /// is recorded atomically.
    fn lookup(&self, customer: &str, item: &OrderItem) -> LookupOutcome {
        let lookup_key = format!(
            "{}{}{}",
            customer,
            KEY_SEPARATOR,
            normalize_article(&item.code)
        );
        let cache_key = format!("{}{}", CACHE_KEY_PREFIX, lookup_key);

        let mut cache = self.cache.lock();
        if let Some(outcome) = cache.get(&cache_key) {
            debug!("Cache hit for item {}", item.code);
            return outcome;
        }

        let outcome = match self.index.get(&lookup_key) {
            Some(record) => {
                debug!("Item found: {}", item.code);
                LookupOutcome::Found(record.clone())
            }
            None => {
                warn!("Item not found: {} for customer {}", item.code, customer);
                LookupOutcome::Missing(missing_reason(customer, &item.code))
            }
        };

        cache.set(cache_key, outcome.clone());
        outcome
    }

    // == Cache Administration ==
    /// Snapshot of the lookup cache.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.lock().stats()
    }

    /// Drops every remembered lookup.
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }

    /// Read access to the catalog index.
    pub fn catalog(&self) -> &CatalogIndex {
        &self.index
    }
}
