//! Cache Statistics Module
//!
//! Counters kept by [`LruCache`](crate::cache::LruCache) and reported through
//! `LruCache::stats`.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of lookup and eviction counters.
///
/// Counters are observational: the cache never reads them back to decide
/// anything. `clear` empties the cache but keeps them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// `get` calls that found their key
    pub hits: u64,
    /// `get` calls on an absent key
    pub misses: u64,
    /// Entries dropped to make room for a new key
    pub evictions: u64,
    /// Live entries when the snapshot was taken
    pub total_entries: usize,
    /// Entry limit fixed at construction
    pub capacity: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Zeroed counters for a cache of `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ..Self::default()
        }
    }

    // == Hit Rate ==
    /// Fraction of `get` calls that hit, in `0.0..=1.0`.
    ///
    /// A cache that has never been read reports 0.0.
    pub fn hit_rate(&self) -> f64 {
        match self.hits + self.misses {
            0 => 0.0,
            lookups => self.hits as f64 / lookups as f64,
        }
    }

    // == Fill Ratio ==
    /// Fraction of capacity in use, in `0.0..=1.0`.
    pub fn fill_ratio(&self) -> f64 {
        match self.capacity {
            0 => 0.0,
            capacity => self.total_entries as f64 / capacity as f64,
        }
    }

    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub(crate) fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
