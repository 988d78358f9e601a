//! LRU Cache Server - A read-through cache in front of a slow data source
//!
//! Provides a fixed-capacity LRU store with O(1) lookup, insertion and
//! eviction, served over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod source;

pub use api::AppState;
pub use cache::LruStore;
pub use config::Config;
pub use error::CacheError;
pub use source::{DataSource, FetchedData, SlowDataSource};
