//! Cache Entry Module
//!
//! Defines the key/value pair tracked by the store and the arena slot that
//! links it into recency order.

// == Slot Addressing ==
/// Position of a slot inside the recency list arena.
pub type SlotIndex = usize;

/// Slot of the most-recent boundary sentinel.
pub const HEAD: SlotIndex = 0;

/// Slot of the least-recent boundary sentinel.
pub const TAIL: SlotIndex = 1;

// == Cache Entry ==
/// A single key/value pair owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// The lookup key
    pub key: K,
    /// The cached payload
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    // == Constructor ==
    /// Creates a new cache entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Splits the entry into its key and value.
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

// == Slot ==
/// One arena cell: an optional entry plus its neighbor links.
///
/// Sentinels and recycled cells hold no entry. Links of a recycled cell are
/// stale and must not be followed.
#[derive(Debug, Clone)]
pub(crate) struct Slot<K, V> {
    pub entry: Option<CacheEntry<K, V>>,
    /// Neighbor towards the most-recent end
    pub prev: SlotIndex,
    /// Neighbor towards the least-recent end
    pub next: SlotIndex,
}

impl<K, V> Slot<K, V> {
    /// Creates an empty boundary slot.
    pub fn sentinel(prev: SlotIndex, next: SlotIndex) -> Self {
        Self {
            entry: None,
            prev,
            next,
        }
    }

    /// Creates a detached slot holding `entry`.
    pub fn occupied(entry: CacheEntry<K, V>) -> Self {
        Self {
            entry: Some(entry),
            prev: HEAD,
            next: TAIL,
        }
    }
}
