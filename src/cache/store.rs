//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with sliding TTL expiration and
//! capacity-based eviction of the least recently accessed entry.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::cache::{CacheCounters, CacheEntry, CacheStats};

// == Expiring Cache ==
/// Bounded key-value store with sliding expiration.
///
/// Expiration is lazy: a stale entry is only dropped when a `get` finds it.
/// When the cache is full, inserting a new key evicts the entry with the
/// oldest access time. No operation fails; absence is reported as `None`.
#[derive(Debug)]
pub struct ExpiringCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Lookup counters
    counters: CacheCounters,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Idle time after which an entry is stale
    ttl: Duration,
    /// Source of `CacheEntry::access_seq`
    next_seq: u64,
}

impl<K, V> ExpiringCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new cache with the given capacity and TTL in seconds.
    ///
    /// # Arguments
    /// * `max_size` - Maximum number of entries; zero is treated as one
    /// * `ttl_seconds` - Idle seconds after which an entry expires
    pub fn new(max_size: usize, ttl_seconds: u64) -> Self {
        Self::with_ttl(max_size, Duration::from_secs(ttl_seconds))
    }

    /// Creates a new cache with an arbitrary TTL duration.
    pub fn with_ttl(max_size: usize, ttl: Duration) -> Self {
        let max_size = max_size.max(1);
        info!(
            "Cache initialized: max_size={}, ttl={}s",
            max_size,
            ttl.as_secs()
        );

        Self {
            entries: HashMap::new(),
            counters: CacheCounters::default(),
            max_size,
            ttl,
            next_seq: 0,
        }
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// A hit refreshes the entry's access time. An expired entry is removed
    /// and reported as absent.
    pub fn get<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_at(key, Instant::now())
    }

    /// Same as [`get`](Self::get) with an explicit clock reading.
    pub fn get_at<Q>(&mut self, key: &Q, now: Instant) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let ttl = self.ttl;
        let expired = match self.entries.get(key) {
            Some(entry) => entry.is_expired(now, ttl),
            None => {
                self.counters.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(key);
            self.counters.record_miss();
            debug!("Cache entry expired");
            return None;
        }

        let seq = self.bump_seq();
        let entry = self.entries.get_mut(key)?;
        entry.touch(now, seq);
        self.counters.record_hit();
        Some(entry.value.clone())
    }

    // == Set ==
    /// Stores a key-value pair.
    ///
    /// If the key already exists, the value is overwritten and its access time
    /// reset. If the key is new and the cache is full, the least recently
    /// accessed entry is evicted first.
    pub fn set(&mut self, key: K, value: V) {
        self.set_at(key, value, Instant::now());
    }

    /// Same as [`set`](Self::set) with an explicit clock reading.
    pub fn set_at(&mut self, key: K, value: V, now: Instant) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_size {
            self.evict_oldest();
        }

        let seq = self.bump_seq();
        self.entries.insert(key, CacheEntry::new(value, now, seq));
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        let removed = self.entries.len();
        self.entries.clear();
        info!("Cache cleared: {} entries removed", removed);
    }

    // == Stats ==
    /// Returns a snapshot of size, configuration and counters.
    pub fn stats(&self) -> CacheStats {
        CacheStats::new(
            self.entries.len(),
            self.max_size,
            self.ttl.as_secs(),
            self.counters,
        )
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included until read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacity of the cache.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    // == Evict Oldest ==
    /// Removes the entry with the oldest access time, if any.
    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| (entry.last_access, entry.access_seq))
            .map(|(key, _)| key.clone());

        if let Some(key) = oldest {
            self.entries.remove(&key);
            self.counters.record_eviction();
            debug!("Cache full, evicted least recently accessed entry");
        }
    }

    fn bump_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }
}
