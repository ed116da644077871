//! Key Index Module
//!
//! Maps keys to their handle in the recency list.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::entry::Handle;

// == Key Index ==
/// Key → handle lookup table. Holds at most one handle per key.
#[derive(Debug)]
pub struct KeyIndex<K> {
    handles: HashMap<K, Handle>,
}

impl<K: Hash + Eq> KeyIndex<K> {
    // == Constructor ==
    /// Creates an empty index sized for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            handles: HashMap::with_capacity(capacity),
        }
    }

    // == Lookup ==
    /// Returns the handle recorded for `key`.
    pub fn lookup<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles.get(key).copied()
    }

    // == Insert ==
    /// Records `handle` for `key`, overwriting any previous mapping.
    ///
    /// The caller must have removed the old list entry first, otherwise it is
    /// orphaned in the list.
    pub fn insert(&mut self, key: K, handle: Handle) {
        self.handles.insert(key, handle);
    }

    // == Remove ==
    /// Drops the mapping for `key`, returning the handle it held.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.handles.remove(key)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    // == Clear ==
    pub fn clear(&mut self) {
        self.handles.clear();
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_lookup_missing() {
        let index: KeyIndex<String> = KeyIndex::with_capacity(4);
        assert!(index.is_empty());
        assert_eq!(index.lookup("nope"), None);
    }

    #[test]
    fn test_index_insert_and_lookup() {
        let mut index = KeyIndex::with_capacity(4);

        index.insert("key1".to_string(), Handle::new(2, 0));
        index.insert("key2".to_string(), Handle::new(3, 0));

        assert_eq!(index.len(), 2);
        assert_eq!(index.lookup("key1"), Some(Handle::new(2, 0)));
        assert_eq!(index.lookup("key2"), Some(Handle::new(3, 0)));
    }

    #[test]
    fn test_index_insert_overwrites() {
        let mut index = KeyIndex::with_capacity(4);

        index.insert(7, Handle::new(2, 0));
        index.insert(7, Handle::new(5, 0));

        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup(&7), Some(Handle::new(5, 0)));
    }

    #[test]
    fn test_index_remove() {
        let mut index = KeyIndex::with_capacity(4);

        index.insert(7, Handle::new(2, 0));
        assert_eq!(index.remove(&7), Some(Handle::new(2, 0)));
        assert_eq!(index.remove(&7), None);
        assert!(index.is_empty());
    }

    #[test]
    fn test_index_clear() {
        let mut index = KeyIndex::with_capacity(4);

        index.insert(1, Handle::new(2, 0));
        index.insert(2, Handle::new(3, 0));
        index.clear();

        assert_eq!(index.len(), 0);
        assert_eq!(index.lookup(&1), None);
    }
}
