//! API Routes
//!
//! Configures the Axum router with all validator endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cache_stats_handler, clear_cache_handler, debug_catalog_handler, health_handler,
    panic_response, validate_order_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /validate-order` - Validate a purchase order against the catalog
/// - `GET /health` - Health check with catalog size
/// - `GET /debug-catalog` - First catalog rows and their lookup keys
/// - `GET /cache/stats` - Lookup cache statistics
/// - `POST /cache/clear` - Drop all cached lookups
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
/// - Panics are turned into a 500 failure body
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/validate-order", post(validate_order_handler))
        .route("/health", get(health_handler))
        .route("/debug-catalog", get(debug_catalog_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/cache/clear", post(clear_cache_handler))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
