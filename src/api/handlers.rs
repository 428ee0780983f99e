//! API Handlers
//!
//! HTTP request handlers for each validator endpoint.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, ExpiringCache};
use crate::catalog::{CatalogSource, CsvCatalogSource};
use crate::config::Config;
use crate::error::{Result, ValidatorError};
use crate::models::{ClearCacheResponse, DebugCatalogResponse, HealthResponse};
use crate::validator::{OrderValidator, PurchaseOrder, ValidationReport};

/// Number of rows and keys shown by the catalog debug endpoint
const DEBUG_SAMPLE_SIZE: usize = 5;

/// Application state shared across all handlers.
///
/// The validator guards its own cache, so the state only needs an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Shared order validator
    pub validator: Arc<OrderValidator>,
}

impl AppState {
    /// Creates a new AppState around the given validator.
    pub fn new(validator: OrderValidator) -> Self {
        Self {
            validator: Arc::new(validator),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Loads the catalog CSV and builds the validator with a cache sized from
    /// the Config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = CsvCatalogSource::new(&config.catalog_path);
        Self::from_source(&source, config)
    }

    /// Creates a new AppState from configuration and an explicit catalog source.
    pub fn from_source(source: &dyn CatalogSource, config: &Config) -> Result<Self> {
        let cache = ExpiringCache::new(config.cache_max_size, config.cache_ttl_seconds);
        let validator = OrderValidator::from_source(source, &config.catalog_columns, cache)?;
        Ok(Self::new(validator))
    }
}

/// Handler for POST /validate-order
///
/// Parses the order body and validates every line against the catalog.
/// Malformed bodies are rejected with 400 and both readiness flags false.
pub async fn validate_order_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ValidationReport>> {
    info!("New validation request received");

    let order = PurchaseOrder::from_json(&body).map_err(|e| {
        warn!("Rejected order payload: {}", e);
        e
    })?;

    let report = state.validator.validate(&order).map_err(|e| {
        warn!("Validation error: {}", e);
        e
    })?;

    info!("Validation finished for order {}", report.order_id);
    Ok(Json(report))
}

/// Handler for GET /health
///
/// Returns health status and the number of catalog rows loaded.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse::ok(state.validator.catalog().row_count()))
}

/// Handler for GET /debug-catalog
///
/// Returns the first catalog rows and their composite lookup keys.
pub async fn debug_catalog_handler(State(state): State<AppState>) -> Json<DebugCatalogResponse> {
    debug!("Catalog debug requested");
    let catalog = state.validator.catalog();

    Json(DebugCatalogResponse::new(
        catalog.head(DEBUG_SAMPLE_SIZE),
        catalog.head_keys(DEBUG_SAMPLE_SIZE),
    ))
}

/// Handler for GET /cache/stats
///
/// Returns current cache statistics.
pub async fn cache_stats_handler(State(state): State<AppState>) -> Json<CacheStats> {
    let stats = state.validator.cache_stats();
    debug!(
        "Cache stats requested: {} entries, hit_rate={:.2}",
        stats.size, stats.hit_rate
    );
    Json(stats)
}

/// Handler for POST /cache/clear
///
/// Drops every cached lookup.
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    info!("Cache clear requested");
    state.validator.clear_cache();
    Json(ClearCacheResponse::success())
}

/// Maps a panic inside a handler to the generic internal failure body.
pub fn panic_response(
    err: Box<dyn std::any::Any + Send + 'static>,
) -> axum::response::Response {
    use axum::response::IntoResponse;

    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected failure".to_string()
    };

    tracing::error!("Handler panicked: {}", detail);
    ValidatorError::Internal(detail).into_response()
}
