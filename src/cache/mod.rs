//! Cache Module
//!
//! Provides a fixed-capacity in-memory cache with LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::{Iter, RecencyList};
pub use stats::CacheStats;
pub use store::LruStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
