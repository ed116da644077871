//! Cache Entry Module
//!
//! Defines the key/value record stored in the recency list and the handle
//! used to address it.

// == Handle ==
/// Non-owning reference to an entry's slot in the recency list arena.
///
/// A handle carries the slot's generation at insert time. Removing the entry
/// bumps the generation, so a handle kept past removal no longer matches even
/// after the slot is reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}

impl Handle {
    pub(crate) fn new(index: usize, generation: u32) -> Self {
        Self { index, generation }
    }
}

// == Cache Entry ==
/// A single cached key/value pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    /// The key, duplicated in the key index
    pub key: K,
    /// The stored value
    pub value: V,
}

impl<K, V> Entry<K, V> {
    // == Constructor ==
    /// Creates a new entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

// == Slot ==
/// Arena cell: links plus an optional entry.
///
/// Sentinel slots and free slots carry no entry.
#[derive(Debug)]
pub(crate) struct Slot<K, V> {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    /// Bumped each time the slot's entry is removed
    pub(crate) generation: u32,
    pub(crate) entry: Option<Entry<K, V>>,
}

impl<K, V> Slot<K, V> {
    pub(crate) fn sentinel(prev: usize, next: usize) -> Self {
        Self {
            prev,
            next,
            generation: 0,
            entry: None,
        }
    }

    pub(crate) fn occupied(entry: Entry<K, V>, generation: u32) -> Self {
        Self {
            prev: 0,
            next: 0,
            generation,
            entry: Some(entry),
        }
    }

    /// Whether `handle` still refers to this slot's current entry.
    pub(crate) fn holds(&self, handle: Handle) -> bool {
        self.entry.is_some() && self.generation == handle.generation
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new() {
        let entry = Entry::new("key1", 10);
        assert_eq!(entry.key, "key1");
        assert_eq!(entry.value, 10);
    }

    #[test]
    fn test_entry_into_parts() {
        let entry = Entry::new(1, "one".to_string());
        let (key, value) = entry.into_parts();
        assert_eq!(key, 1);
        assert_eq!(value, "one");
    }

    #[test]
    fn test_sentinel_slot_holds_no_entry() {
        let slot: Slot<u8, u8> = Slot::sentinel(0, 1);
        assert!(slot.entry.is_none());
        assert_eq!((slot.prev, slot.next), (0, 1));
        assert!(!slot.holds(Handle::new(0, 0)));
    }

    #[test]
    fn test_slot_holds_matching_generation_only() {
        let slot = Slot::occupied(Entry::new(1u8, 1u8), 3);
        assert!(slot.holds(Handle::new(2, 3)));
        assert!(!slot.holds(Handle::new(2, 2)));
    }
}
