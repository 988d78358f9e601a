//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies. Field names are
//! camelCase on the wire.

use serde::Serialize;

use crate::cache::{CacheEntry, CacheStats};
use crate::source::FetchedData;

/// Where a data lookup was answered from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DataOrigin {
    #[serde(rename = "cache")]
    Cache,
    #[serde(rename = "slow-source")]
    SlowSource,
}

/// Response body for the data lookup (GET /api/data/:key)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataResponse {
    /// Cache or upstream
    pub source: DataOrigin,
    /// True when the value came from the cache
    pub cache_hit: bool,
    /// Wall-clock time spent serving the lookup
    pub response_time_ms: u64,
    /// The record
    pub data: FetchedData,
}

impl DataResponse {
    /// Creates a response for a value found in the cache
    pub fn hit(data: FetchedData, response_time_ms: u64) -> Self {
        Self {
            source: DataOrigin::Cache,
            cache_hit: true,
            response_time_ms,
            data,
        }
    }

    /// Creates a response for a value fetched from upstream
    pub fn miss(data: FetchedData, response_time_ms: u64) -> Self {
        Self {
            source: DataOrigin::SlowSource,
            cache_hit: false,
            response_time_ms,
            data,
        }
    }
}

/// One cached entry as shown by the state endpoint
#[derive(Debug, Clone, Serialize)]
pub struct StateEntry {
    pub key: String,
    pub value: FetchedData,
}

impl From<CacheEntry<String, FetchedData>> for StateEntry {
    fn from(entry: CacheEntry<String, FetchedData>) -> Self {
        let (key, value) = entry.into_parts();
        Self { key, value }
    }
}

/// Response body for the state endpoint (GET /cache/state)
#[derive(Debug, Clone, Serialize)]
pub struct StateResponse {
    /// Entries from most to least recently used
    pub state: Vec<StateEntry>,
}

impl StateResponse {
    /// Creates a new StateResponse from an ordered snapshot
    pub fn new(snapshot: Vec<CacheEntry<String, FetchedData>>) -> Self {
        Self {
            state: snapshot.into_iter().map(StateEntry::from).collect(),
        }
    }
}

/// Response body for the stats endpoint (GET /cache/stats)
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    /// Maximum number of entries
    pub capacity: usize,
    /// Current number of entries in cache
    pub size: usize,
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// hits / (hits + misses), rounded to two decimals
    pub hit_ratio: f64,
}

impl From<&CacheStats> for StatsResponse {
    fn from(stats: &CacheStats) -> Self {
        Self {
            capacity: stats.capacity,
            size: stats.size,
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            hit_ratio: (stats.hit_ratio() * 100.0).round() / 100.0,
        }
    }
}

/// Response body for the reconfiguration (POST /cache/config)
#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    /// Success message, including the reset notice
    pub message: String,
    /// The capacity now in effect
    pub capacity: usize,
}

impl ConfigResponse {
    /// Creates a new ConfigResponse
    pub fn new(capacity: usize) -> Self {
        Self {
            message: "Cache capacity updated; all entries and statistics were cleared"
                .to_string(),
            capacity,
        }
    }
}

/// Response body for the clear operation (DELETE /cache)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Success message
    pub message: String,
}

impl ClearResponse {
    /// Creates a new ClearResponse
    pub fn new() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
