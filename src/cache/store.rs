//! Cache Store Module
//!
//! LRU cache engine combining the key index with the recency list.

use std::borrow::Borrow;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::cache::{CacheStats, KeyIndex, RecencyList};
use crate::error::{CacheError, Result};

// == LRU Cache ==
/// Fixed-capacity key/value cache with least-recently-used eviction.
///
/// `get` and `put` are O(1): the index finds the entry's handle and the list
/// relocates or evicts it without scanning. `get` takes `&mut self` because a
/// hit reorders the list; wrap the whole cache in one lock for shared use.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Entries ordered by recency
    list: RecencyList<K, V>,
    /// Key → list handle
    index: KeyIndex<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries, fixed at construction
    capacity: usize,
    /// Current number of entries
    size: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        debug!(capacity, "LRU cache created");
        Ok(Self {
            list: RecencyList::with_capacity(capacity),
            index: KeyIndex::with_capacity(capacity),
            stats: CacheStats::new(capacity),
            capacity,
            size: 0,
        })
    }

    // == Get ==
    /// Returns the value for `key` and marks it most recently used.
    ///
    /// A miss changes no entry, ordering or size. It does bump the `misses`
    /// counter reported by [`LruCache::stats`], the same way a hit bumps `hits`.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(handle) = self.index.lookup(key) else {
            self.stats.record_miss();
            trace!("cache miss");
            return None;
        };

        self.list.move_to_front(handle);
        self.stats.record_hit();
        trace!("cache hit");
        self.list.get(handle).map(|entry| &entry.value)
    }

    // == Put ==
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// An existing entry for `key` is discarded first. If the cache is then
    /// full, the least recently used entry is evicted.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(stale) = self.index.remove(&key) {
            self.list.remove(stale);
            self.size -= 1;
        }

        if self.size == self.capacity {
            self.evict_lru();
        }

        let handle = self.list.push_front(key.clone(), value);
        self.index.insert(key, handle);
        self.size += 1;
        self.check_invariants();
    }

    // == Peek ==
    /// Returns the value for `key` without touching its recency.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.lookup(key)?;
        self.list.get(handle).map(|entry| &entry.value)
    }

    // == Peek LRU ==
    /// Returns the entry that the next eviction would remove.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let handle = self.list.back()?;
        self.list.get(handle).map(|entry| (&entry.key, &entry.value))
    }

    // == Contains ==
    /// Checks whether `key` is cached, without touching its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.lookup(key).is_some()
    }

    // == Remove ==
    /// Removes `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let handle = self.index.remove(key)?;
        let (_, value) = self.list.remove(handle)?.into_parts();
        self.size -= 1;
        self.check_invariants();
        Some(value)
    }

    // == Clear ==
    /// Drops every entry. Capacity and statistics counters are kept.
    pub fn clear(&mut self) {
        self.list.clear();
        self.index.clear();
        self.size = 0;
    }

    // == Keys ==
    /// Iterates keys from most to least recently used.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.list.iter().map(|entry| &entry.key)
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.list.iter().map(|entry| (&entry.key, &entry.value))
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.size);
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.size
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn evict_lru(&mut self) {
        let Some(victim) = self.list.back().and_then(|lru| self.list.remove(lru)) else {
            unreachable!(
                "recency list empty while cache is full (capacity {})",
                self.capacity
            );
        };

        let (key, _) = victim.into_parts();
        self.index.remove(&key);
        self.size -= 1;
        self.stats.record_eviction();
        debug!(capacity = self.capacity, "evicted least recently used entry");
    }

    fn check_invariants(&self) {
        debug_assert_eq!(self.size, self.list.len(), "size out of sync with list");
        debug_assert_eq!(self.size, self.index.len(), "size out of sync with index");
        debug_assert!(self.size <= self.capacity, "size exceeds capacity");
    }
}
