//! API Module
//!
//! HTTP handlers and routing for the order validator REST API.
//!
//! # Endpoints
//! - `POST /validate-order` - Validate a purchase order
//! - `GET /health` - Health check endpoint
//! - `GET /debug-catalog` - Catalog sample
//! - `GET /cache/stats` - Get cache statistics
//! - `POST /cache/clear` - Clear the lookup cache

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
