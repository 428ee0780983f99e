//! Cache Module
//!
//! Provides a bounded in-memory cache with sliding TTL expiration and
//! eviction of the least recently accessed entry.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheCounters, CacheStats};
pub use store::ExpiringCache;

// == Public Constants ==
/// Default maximum number of cached entries
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// Default sliding expiration window in seconds
pub const DEFAULT_TTL_SECONDS: u64 = 3600;
