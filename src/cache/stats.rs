//! Cache Statistics Module
//!
//! Tracks lookup counters and builds the stats snapshot reported by the cache.

use serde::Serialize;

// == Cache Counters ==
/// Running lookup counters kept by the cache.
#[derive(Debug, Clone, Copy, Default)]
pub struct CacheCounters {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted because the cache was full
    pub evictions: u64,
}

impl CacheCounters {
    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }
}

// == Cache Stats ==
/// Point-in-time view of the cache.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CacheStats {
    /// Current number of entries
    pub size: usize,
    /// Capacity before eviction kicks in
    pub max_size: usize,
    /// Sliding expiration window in seconds
    pub ttl_seconds: u64,
    /// Occupancy ratio `size / max_size`. Not a hit ratio, see `lookup_hit_ratio`
    pub hit_rate: f64,
    /// Successful retrievals since creation
    pub hits: u64,
    /// Failed retrievals since creation
    pub misses: u64,
    /// Capacity evictions since creation
    pub evictions: u64,
    /// `hits / (hits + misses)`, zero before the first lookup
    pub lookup_hit_ratio: f64,
}

impl CacheStats {
    // == Constructor ==
    /// Builds a snapshot from the current size, configuration and counters.
    pub fn new(size: usize, max_size: usize, ttl_seconds: u64, counters: CacheCounters) -> Self {
        let hit_rate = if max_size == 0 {
            0.0
        } else {
            size as f64 / max_size as f64
        };
        let lookups = counters.hits + counters.misses;
        let lookup_hit_ratio = if lookups == 0 {
            0.0
        } else {
            counters.hits as f64 / lookups as f64
        };

        Self {
            size,
            max_size,
            ttl_seconds,
            hit_rate,
            hits: counters.hits,
            misses: counters.misses,
            evictions: counters.evictions,
            lookup_hit_ratio,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_default() {
        let counters = CacheCounters::default();
        assert_eq!(counters.hits, 0);
        assert_eq!(counters.misses, 0);
        assert_eq!(counters.evictions, 0);
    }

    #[test]
    fn test_hit_rate_is_occupancy() {
        let stats = CacheStats::new(250, 1000, 3600, CacheCounters::default());
        assert_eq!(stats.hit_rate, 0.25);
    }

    #[test]
    fn test_hit_rate_zero_capacity() {
        let stats = CacheStats::new(0, 0, 3600, CacheCounters::default());
        assert_eq!(stats.hit_rate, 0.0);
    }

    #[test]
    fn test_lookup_hit_ratio_mixed() {
        let mut counters = CacheCounters::default();
        counters.record_hit();
        counters.record_hit();
        counters.record_hit();
        counters.record_miss();

        let stats = CacheStats::new(1, 10, 60, counters);
        assert_eq!(stats.lookup_hit_ratio, 0.75);
    }

    #[test]
    fn test_lookup_hit_ratio_no_requests() {
        let stats = CacheStats::new(0, 10, 60, CacheCounters::default());
        assert_eq!(stats.lookup_hit_ratio, 0.0);
    }

    #[test]
    fn test_record_eviction() {
        let mut counters = CacheCounters::default();
        counters.record_eviction();
        counters.record_eviction();
        assert_eq!(counters.evictions, 2);
    }
}
