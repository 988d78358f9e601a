//! LRU Recency List Module
//!
//! Doubly-linked recency order stored in an arena of slots.
//!
//! Slots reference their neighbors by index instead of by pointer, so a
//! splice is a handful of index writes and there are no ownership cycles.
//! Two sentinel slots bound the list:
//! - `HEAD` = most recently used boundary
//! - `TAIL` = least recently used boundary

use crate::cache::entry::{CacheEntry, Slot, SlotIndex, HEAD, TAIL};

// == Recency List ==
/// Tracks entries in access order with O(1) push, move and pop.
#[derive(Debug, Clone)]
pub struct RecencyList<K, V> {
    /// Arena of slots; indices 0 and 1 are the sentinels
    slots: Vec<Slot<K, V>>,
    /// Recycled slot indices
    free: Vec<SlotIndex>,
    /// Number of live entries
    len: usize,
}

impl<K, V> Default for RecencyList<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> RecencyList<K, V> {
    // == Constructor ==
    /// Creates an empty list holding only the two sentinels.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty list with arena room for `capacity` entries.
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
    /// Inserts a new entry at the most recent position.
    ///
    /// Returns the slot index that now addresses the entry.
    pub fn push_front(&mut self, entry: CacheEntry<K, V>) -> SlotIndex {
        let idx = match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Slot::occupied(entry);
                idx
            }
            None => {
                self.slots.push(Slot::occupied(entry));
                self.slots.len() - 1
            }
        };
        self.link_front(idx);
        self.len += 1;
        idx
    }

    // == Move To Front ==
    /// Marks the entry at `idx` as most recently used.
    pub fn move_to_front(&mut self, idx: SlotIndex) {
        if self.slots[HEAD].next == idx || !self.is_live(idx) {
            return;
        }
        self.unlink(idx);
        self.link_front(idx);
    }

    // == Pop Back ==
    /// Removes and returns the least recently used entry.
    ///
    /// Returns None if the list is empty.
    pub fn pop_back(&mut self) -> Option<CacheEntry<K, V>> {
        let idx = self.slots[TAIL].prev;
        if idx == HEAD {
            return None;
        }
        self.unlink(idx);
        self.len -= 1;
        self.free.push(idx);
        self.slots[idx].entry.take()
    }

    // == Accessors ==
    /// Returns the entry stored at `idx`, if that slot is live.
    pub fn get(&self, idx: SlotIndex) -> Option<&CacheEntry<K, V>> {
        self.slots.get(idx).and_then(|slot| slot.entry.as_ref())
    }

    /// Returns the entry stored at `idx` mutably, if that slot is live.
    pub fn get_mut(&mut self, idx: SlotIndex) -> Option<&mut CacheEntry<K, V>> {
        self.slots.get_mut(idx).and_then(|slot| slot.entry.as_mut())
    }

    /// Returns the most recently used entry.
    pub fn front(&self) -> Option<&CacheEntry<K, V>> {
        self.get(self.slots[HEAD].next)
    }

    /// Returns the least recently used entry without removing it.
    pub fn back(&self) -> Option<&CacheEntry<K, V>> {
        self.get(self.slots[TAIL].prev)
    }

    /// Returns the number of live entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // == Clear ==
    /// Drops every entry and returns to the two-sentinel state.
    pub fn clear(&mut self) {
        self.slots.truncate(2);
        self.slots[HEAD] = Slot::sentinel(HEAD, TAIL);
        self.slots[TAIL] = Slot::sentinel(HEAD, TAIL);
        self.free.clear();
        self.len = 0;
    }

    // == Iteration ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            list: self,
            cursor: self.slots[HEAD].next,
            remaining: self.len,
        }
    }

    // == Link Helpers ==
    fn is_live(&self, idx: SlotIndex) -> bool {
        idx != HEAD && idx != TAIL && self.get(idx).is_some()
    }

    /// Splices a detached slot in right after the head sentinel.
    fn link_front(&mut self, idx: SlotIndex) {
        let first = self.slots[HEAD].next;
        self.slots[idx].prev = HEAD;
        self.slots[idx].next = first;
        self.slots[first].prev = idx;
        self.slots[HEAD].next = idx;
    }

    /// Detaches a slot from its neighbors. The slot's own links go stale.
    fn unlink(&mut self, idx: SlotIndex) {
        let prev = self.slots[idx].prev;
        let next = self.slots[idx].next;
        self.slots[prev].next = next;
        self.slots[next].prev = prev;
    }
}

#[cfg(test)]
impl<K, V> RecencyList<K, V> {
    /// Slot indices walked head to tail.
    pub(crate) fn forward_slots(&self) -> Vec<SlotIndex> {
        let mut out = Vec::new();
        let mut cursor = self.slots[HEAD].next;
        while cursor != TAIL {
            out.push(cursor);
            cursor = self.slots[cursor].next;
            assert!(out.len() <= self.slots.len(), "cycle in recency list");
        }
        out
    }

    /// Slot indices walked tail to head.
    pub(crate) fn backward_slots(&self) -> Vec<SlotIndex> {
        let mut out = Vec::new();
        let mut cursor = self.slots[TAIL].prev;
        while cursor != HEAD {
            out.push(cursor);
            cursor = self.slots[cursor].prev;
            assert!(out.len() <= self.slots.len(), "cycle in recency list");
        }
        out
    }

    /// Panics if any pair of neighbor links disagrees.
    pub(crate) fn assert_links(&self) {
        let forward = self.forward_slots();
        let mut backward = self.backward_slots();
        backward.reverse();
        assert_eq!(forward, backward, "forward and backward walks differ");
        assert_eq!(forward.len(), self.len, "walk length differs from len");

        let mut prev = HEAD;
        for &idx in &forward {
            assert_eq!(self.slots[prev].next, idx);
            assert_eq!(self.slots[idx].prev, prev);
            assert!(self.slots[idx].entry.is_some(), "linked slot is empty");
            prev = idx;
        }
        assert_eq!(self.slots[prev].next, TAIL);
        assert_eq!(self.slots[TAIL].prev, prev);
    }

    /// Number of arena cells, sentinels included.
    pub(crate) fn arena_len(&self) -> usize {
        self.slots.len()
    }
}

// == Iterator ==
/// Borrowing iterator over entries, most recent first.
pub struct Iter<'a, K, V> {
    list: &'a RecencyList<K, V>,
    cursor: SlotIndex,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = &'a CacheEntry<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == TAIL {
            return None;
        }
        let list = self.list;
        let slot = &list.slots[self.cursor];
        self.cursor = slot.next;
        self.remaining = self.remaining.saturating_sub(1);
        slot.entry.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &RecencyList<&'static str, u32>) -> Vec<&'static str> {
        list.iter().map(|e| e.key).collect()
    }

    #[test]
    fn test_list_new() {
        let list: RecencyList<&str, u32> = RecencyList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
        list.assert_links();
    }

    #[test]
    fn test_push_front_orders_most_recent_first() {
        let mut list = RecencyList::new();

        list.push_front(CacheEntry::new("key1", 1));
        list.push_front(CacheEntry::new("key2", 2));
        list.push_front(CacheEntry::new("key3", 3));

        assert_eq!(list.len(), 3);
        assert_eq!(keys(&list), vec!["key3", "key2", "key1"]);
        // key1 is oldest (added first)
        assert_eq!(list.back().map(|e| e.key), Some("key1"));
        list.assert_links();
    }

    #[test]
    fn test_move_to_front() {
        let mut list = RecencyList::new();

        let a = list.push_front(CacheEntry::new("a", 1));
        list.push_front(CacheEntry::new("b", 2));
        list.push_front(CacheEntry::new("c", 3));

        list.move_to_front(a);

        assert_eq!(keys(&list), vec!["a", "c", "b"]);
        assert_eq!(list.back().map(|e| e.key), Some("b"));
        list.assert_links();
    }

    #[test]
    fn test_move_front_entry_is_noop() {
        let mut list = RecencyList::new();

        list.push_front(CacheEntry::new("a", 1));
        let b = list.push_front(CacheEntry::new("b", 2));

        list.move_to_front(b);

        assert_eq!(keys(&list), vec!["b", "a"]);
        list.assert_links();
    }

    #[test]
    fn test_move_ignores_sentinels_and_free_slots() {
        let mut list = RecencyList::new();

        list.push_front(CacheEntry::new("a", 1));
        list.push_front(CacheEntry::new("b", 2));
        let freed = list.push_front(CacheEntry::new("c", 3));
        list.move_to_front(HEAD);
        list.move_to_front(TAIL);

        // Drain the list so c's slot sits on the free list
        list.pop_back();
        list.pop_back();
        list.pop_back();
        list.move_to_front(freed);

        assert!(list.is_empty());
        list.assert_links();
    }

    #[test]
    fn test_pop_back_evicts_oldest() {
        let mut list = RecencyList::new();

        list.push_front(CacheEntry::new("key1", 1));
        list.push_front(CacheEntry::new("key2", 2));
        list.push_front(CacheEntry::new("key3", 3));

        assert_eq!(list.pop_back(), Some(CacheEntry::new("key1", 1)));
        assert_eq!(list.len(), 2);

        assert_eq!(list.pop_back(), Some(CacheEntry::new("key2", 2)));
        assert_eq!(list.len(), 1);
        list.assert_links();
    }

    #[test]
    fn test_pop_back_empty() {
        let mut list: RecencyList<&str, u32> = RecencyList::new();
        assert_eq!(list.pop_back(), None);
        list.assert_links();
    }

    #[test]
    fn test_freed_slots_are_recycled() {
        let mut list = RecencyList::new();

        list.push_front(CacheEntry::new("a", 1));
        list.push_front(CacheEntry::new("b", 2));
        let arena = list.arena_len();

        for (i, key) in ["c", "d", "e", "f"].into_iter().enumerate() {
            list.pop_back();
            list.push_front(CacheEntry::new(key, i as u32));
        }

        assert_eq!(list.arena_len(), arena);
        assert_eq!(keys(&list), vec!["f", "e"]);
        list.assert_links();
    }

    #[test]
    fn test_order_after_multiple_touches() {
        let mut list = RecencyList::new();

        let a = list.push_front(CacheEntry::new("a", 1));
        let b = list.push_front(CacheEntry::new("b", 2));
        let c = list.push_front(CacheEntry::new("c", 3));

        list.move_to_front(a);
        list.move_to_front(c);
        list.move_to_front(b);

        assert_eq!(keys(&list), vec!["b", "c", "a"]);
        assert_eq!(list.pop_back().map(|e| e.key), Some("a"));
        assert_eq!(list.pop_back().map(|e| e.key), Some("c"));
        assert_eq!(list.pop_back().map(|e| e.key), Some("b"));
        assert!(list.is_empty());
    }

    #[test]
    fn test_get_mut_replaces_value_in_place() {
        let mut list = RecencyList::new();

        let idx = list.push_front(CacheEntry::new("a", 1));
        if let Some(entry) = list.get_mut(idx) {
            entry.value = 10;
        }

        assert_eq!(list.get(idx).map(|e| e.value), Some(10));
        assert!(list.get(HEAD).is_none());
        assert!(list.get(TAIL).is_none());
        assert!(list.get(999).is_none());
    }

    #[test]
    fn test_clear_resets_to_sentinels() {
        let mut list = RecencyList::new();

        list.push_front(CacheEntry::new("a", 1));
        list.push_front(CacheEntry::new("b", 2));
        list.pop_back();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.arena_len(), 2);
        assert_eq!(list.iter().count(), 0);
        list.assert_links();

        list.push_front(CacheEntry::new("c", 3));
        assert_eq!(keys(&list), vec!["c"]);
        list.assert_links();
    }

    #[test]
    fn test_iter_reports_exact_size() {
        let mut list = RecencyList::new();

        list.push_front(CacheEntry::new("a", 1));
        list.push_front(CacheEntry::new("b", 2));

        let mut iter = list.iter();
        assert_eq!(iter.len(), 2);
        iter.next();
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn test_iter_size_hint_never_underflows() {
        let mut list = RecencyList::new();
        list.push_front(CacheEntry::new("a", 1));
        list.push_front(CacheEntry::new("b", 2));

        // Count out of step with the links
        list.len = 1;

        let mut iter = list.iter();
        assert_eq!(iter.next().map(|e| e.key), Some("b"));
        assert_eq!(iter.next().map(|e| e.key), Some("a"));
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert!(iter.next().is_none());
    }
}
