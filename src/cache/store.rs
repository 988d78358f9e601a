//! Cache Store Module
//!
//! Main cache engine combining a HashMap index with an arena-backed recency
//! list. Every operation is O(1) except `snapshot` and `clear`.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::entry::SlotIndex;
use crate::cache::{CacheEntry, CacheStats, RecencyList};
use crate::error::{CacheError, Result};

/// Upper bound on up-front allocation; larger stores grow on demand
const MAX_RESERVED_ENTRIES: usize = 4096;

// == LRU Store ==
/// Fixed-capacity LRU cache.
///
/// The store does no locking. Callers that share it across tasks must
/// serialize access themselves.
#[derive(Debug, Clone)]
pub struct LruStore<K, V> {
    /// Key to arena slot
    index: HashMap<K, SlotIndex>,
    /// Entries in recency order
    order: RecencyList<K, V>,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
}

impl<K, V> LruStore<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty store that holds at most `capacity` entries.
    ///
    /// Fails with `InvalidCapacity` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = validate_capacity(capacity)?;
        let reserved = capacity.min(MAX_RESERVED_ENTRIES);
        Ok(Self {
            index: HashMap::with_capacity(reserved),
            order: RecencyList::with_capacity(reserved),
            stats: CacheStats::new(),
            capacity,
        })
    }

    // == Get ==
    /// Looks up `key`, counting a hit or a miss.
    ///
    /// A hit moves the entry to the most recent position. A miss leaves the
    /// order untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let Some(&idx) = self.index.get(key) else {
            self.stats.record_miss();
            return None;
        };

        self.stats.record_hit();
        self.order.move_to_front(idx);
        self.order.get(idx).map(|entry| &entry.value)
    }

    // == Peek ==
    /// Returns the value for `key` without touching recency or counters.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.index.get(key)?;
        self.order.get(idx).map(|entry| &entry.value)
    }

    /// Checks membership without touching recency or counters.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    // == Put ==
    /// Stores a key-value pair as the most recently used entry.
    ///
    /// Overwriting an existing key never evicts. Inserting a new key into a
    /// full store evicts exactly one entry, the least recently used one, and
    /// returns it.
    pub fn put(&mut self, key: K, value: V) -> Option<CacheEntry<K, V>> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(entry) = self.order.get_mut(idx) {
                entry.value = value;
            }
            self.order.move_to_front(idx);
            return None;
        }

        let idx = self.order.push_front(CacheEntry::new(key.clone(), value));
        self.index.insert(key, idx);

        if self.order.len() > self.capacity {
            return self.evict_lru();
        }
        None
    }

    /// Drops the entry at the least recent end.
    fn evict_lru(&mut self) -> Option<CacheEntry<K, V>> {
        let evicted = self.order.pop_back()?;
        self.index.remove(&evicted.key);
        self.stats.record_eviction();
        Some(evicted)
    }

    // == Snapshot ==
    /// Iterates entries from most to least recently used without side effects.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&K, &V)> + '_ {
        self.order.iter().map(|entry| (&entry.key, &entry.value))
    }

    /// Copies out every entry, most recently used first.
    pub fn snapshot(&self) -> Vec<CacheEntry<K, V>>
    where
        V: Clone,
    {
        self.order.iter().cloned().collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.capacity = self.capacity;
        stats.size = self.order.len();
        stats
    }

    // == Reconfigure ==
    /// Replaces the capacity and resets the store.
    ///
    /// Resizing always discards every entry and zeroes the counters, even
    /// when growing. On `InvalidCapacity` nothing changes.
    pub fn reconfigure(&mut self, capacity: usize) -> Result<()> {
        self.capacity = validate_capacity(capacity)?;
        self.clear();
        Ok(())
    }

    // == Clear ==
    /// Removes all entries and zeroes the counters. Capacity is kept.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
        self.stats.reset_counters();
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
impl<K, V> LruStore<K, V>
where
    K: Hash + Eq + Clone + std::fmt::Debug,
{
    /// Panics unless index, list and capacity all agree.
    pub(crate) fn assert_invariants(&self) {
        self.order.assert_links();

        assert_eq!(self.index.len(), self.order.len(), "index/list size mismatch");
        assert!(self.order.len() <= self.capacity, "capacity exceeded");

        for idx in self.order.forward_slots() {
            let entry = self.order.get(idx).expect("linked slot must be live");
            assert_eq!(
                self.index.get(&entry.key),
                Some(&idx),
                "key {:?} not indexed at its slot",
                entry.key
            );
        }

        // One spare cell covers the transient overshoot inside `put`
        assert!(self.order.arena_len() <= self.capacity + 3, "arena leaked");
    }
}

/// Accepts only positive capacities.
fn validate_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(CacheError::InvalidCapacity(
            "capacity must be a positive integer, got 0".to_string(),
        ));
    }
    Ok(capacity)
}
