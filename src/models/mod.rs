//! Response models for the validator API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies. Request bodies are parsed into
//! `validator::PurchaseOrder`.

pub mod responses;

// Re-export commonly used types
pub use responses::{ClearCacheResponse, DebugCatalogResponse, FailureResponse, HealthResponse};
