//! Response DTOs for the validator API
//!
//! Defines the structure of outgoing HTTP response bodies. Validation
//! reports and cache stats are serialized as-is and are not repeated here.

use serde::Serialize;

use crate::catalog::CatalogRecord;

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status ("OK")
    pub status: String,
    /// Number of catalog rows loaded
    pub catalog_items: usize,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn ok(catalog_items: usize) -> Self {
        Self {
            status: "OK".to_string(),
            catalog_items,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Response body for GET /debug-catalog
#[derive(Debug, Clone, Serialize)]
pub struct DebugCatalogResponse {
    /// First catalog rows in source order
    pub first_rows: Vec<CatalogRecord>,
    /// Composite lookup keys of those rows
    pub lookup_keys: Vec<String>,
}

impl DebugCatalogResponse {
    pub fn new(first_rows: &[CatalogRecord], lookup_keys: &[String]) -> Self {
        Self {
            first_rows: first_rows.to_vec(),
            lookup_keys: lookup_keys.to_vec(),
        }
    }
}

/// Response body for POST /cache/clear
#[derive(Debug, Clone, Serialize)]
pub struct ClearCacheResponse {
    /// Success message
    pub message: String,
    /// Always "success"
    pub status: String,
}

impl ClearCacheResponse {
    pub fn success() -> Self {
        Self {
            message: "Cache cleared successfully".to_string(),
            status: "success".to_string(),
        }
    }
}

/// Error body for a failed validation request.
///
/// Keeps the report's readiness flags, both false, so callers that only read
/// the flags still see the order as blocked.
#[derive(Debug, Clone, Serialize)]
pub struct FailureResponse {
    pub all_items_exist: bool,
    pub can_proceed: bool,
    /// Error message describing what went wrong
    pub error: String,
    /// Human-readable summary
    pub message: String,
}

impl FailureResponse {
    /// Creates a new FailureResponse
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            all_items_exist: false,
            can_proceed: false,
            error: error.into(),
            message: message.into(),
        }
    }
}
