//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with sliding expiration.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// Represents a single cache entry with its value and last access metadata.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Time of insertion or of the last successful read
    pub last_access: Instant,
    /// Monotonic access counter, orders entries touched within the same instant
    pub access_seq: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry accessed at `now`.
    pub fn new(value: V, now: Instant, access_seq: u64) -> Self {
        Self {
            value,
            last_access: now,
            access_seq,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl` since its last access.
    ///
    /// Boundary condition: an entry idle for exactly `ttl` is still valid; it
    /// expires only once the idle time is strictly greater than `ttl`.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.saturating_duration_since(self.last_access) > ttl
    }

    // == Touch ==
    /// Restarts the expiration countdown.
    pub fn touch(&mut self, now: Instant, access_seq: u64) {
        self.last_access = now;
        self.access_seq = access_seq;
    }
}
