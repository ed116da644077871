//! Recency List Module
//!
//! Doubly linked list of entries ordered from most to least recently used.
//!
//! Entries live in an arena (`Vec` of slots) and link to each other by index,
//! so the key index can hold plain [`Handle`]s without sharing ownership.
//! Slots 0 and 1 are permanent head and tail sentinels: every real entry sits
//! strictly between them, so linking and unlinking never branch on the ends.

use crate::cache::entry::{Entry, Handle, Slot};

const HEAD: usize = 0;
const TAIL: usize = 1;

// == Recency List ==
/// Arena-backed recency list.
///
/// - Front (first slot after `HEAD`) = most recently used
/// - Back (last slot before `TAIL`) = least recently used
#[derive(Debug)]
pub struct RecencyList<K, V> {
    /// Sentinels followed by entry slots
    slots: Vec<Slot<K, V>>,
    /// Indices of vacated slots available for reuse
    free: Vec<usize>,
    /// Number of live entries
    len: usize,
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list holding only the two sentinels.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity + 2);
        slots.push(Slot::sentinel(HEAD, TAIL));
        slots.push(Slot::sentinel(HEAD, TAIL));
        Self {
            slots,
            free: Vec::new(),
            len: 0,
        }
    }

    // == Push Front ==
    /// Inserts a new entry right after the head sentinel and returns its handle.
    pub fn push_front(&mut self, key: K, value: V) -> Handle {
        let entry = Entry::new(key, value);
        let (idx, generation) = match self.free.pop() {
            Some(idx) => {
                let generation = self.slots[idx].generation;
                self.slots[idx] = Slot::occupied(entry, generation);
                (idx, generation)
            }
            None => {
                self.slots.push(Slot::occupied(entry, 0));
                (self.slots.len() - 1, 0)
            }
        };

        self.link_front(idx);
        self.len += 1;
        Handle::new(idx, generation)
    }

    // == Remove ==
    /// Unlinks the entry behind `handle` and hands it back to the caller.
    ///
    /// Returns `None` for a sentinel or a handle whose entry was already
    /// removed, even if the slot has since been reused.
    pub fn remove(&mut self, handle: Handle) -> Option<Entry<K, V>> {
        if !self.is_live(handle) {
            return None;
        }

        let idx = handle.index;
        let slot = &mut self.slots[idx];
        let entry = slot.entry.take()?;
        slot.generation = slot.generation.wrapping_add(1);

        self.unlink(idx);
        self.free.push(idx);
        self.len -= 1;
        Some(entry)
    }

    // == Move To Front ==
    /// Marks the entry behind `handle` as most recently used.
    ///
    /// Stale handles are ignored.
    pub fn move_to_front(&mut self, handle: Handle) {
        let idx = handle.index;
        if !self.is_live(handle) || self.slots[HEAD].next == idx {
            return;
        }

        self.unlink(idx);
        self.link_front(idx);
    }

    // == Back ==
    /// Returns the least recently used entry's handle, if any.
    pub fn back(&self) -> Option<Handle> {
        match self.slots[TAIL].prev {
            HEAD => None,
            idx => Some(Handle::new(idx, self.slots[idx].generation)),
        }
    }

    /// Borrows the entry behind `handle`, or `None` if the handle is stale.
    pub fn get(&self, handle: Handle) -> Option<&Entry<K, V>> {
        self.slots
            .get(handle.index)
            .filter(|slot| slot.holds(handle))?
            .entry
            .as_ref()
    }

    // == Length ==
    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every entry, leaving only the sentinels.
    ///
    /// Slots are kept for reuse with bumped generations, so handles taken
    /// before the clear stay stale.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut().skip(2) {
            if slot.entry.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.slots[HEAD] = Slot::sentinel(HEAD, TAIL);
        self.slots[TAIL] = Slot::sentinel(HEAD, TAIL);
        self.free = (2..self.slots.len()).rev().collect();
        self.len = 0;
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.slots[HEAD].next,
            remaining: self.len,
        }
    }

    fn is_live(&self, handle: Handle) -> bool {
        self.slots
            .get(handle.index)
            .is_some_and(|slot| slot.holds(handle))
    }

    fn link_front(&mut self, idx: usize) {
        let first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = first;
        self.slots[first].prev = idx;
        self.slots[HEAD].next = idx;
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.slots[idx].prev, self.slots[idx].next);
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

// == Iterator ==
/// Front-to-back iterator over a [`RecencyList`].
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: usize,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a Entry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == TAIL {
            return None;
        }
        let slot = &self.list.slots[self.cursor];
        self.cursor = slot.next;
        self.remaining -= 1;
        slot.entry.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
