//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::LruStore;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ClearResponse, ConfigRequest, ConfigResponse, DataRequest, DataResponse, HealthResponse,
    StateResponse, StatsResponse,
};
use crate::source::{DataSource, FetchedData, SlowDataSource};

/// The cache as shared between handlers.
pub type SharedStore = Arc<RwLock<LruStore<String, FetchedData>>>;

/// Application state shared across all handlers.
///
/// The store itself does no locking; every access goes through the RwLock.
/// The lock is never held while the upstream source is working.
#[derive(Clone)]
pub struct AppState<S> {
    /// Serialized access to the cache store
    pub cache: SharedStore,
    /// Upstream consulted on a miss
    pub source: S,
}

impl<S: DataSource> AppState<S> {
    /// Creates a new AppState with an empty store of the given capacity.
    pub fn new(capacity: usize, source: S) -> Result<Self> {
        Ok(Self::with_store(LruStore::new(capacity)?, source))
    }

    /// Creates a new AppState around an existing store.
    pub fn with_store(store: LruStore<String, FetchedData>, source: S) -> Self {
        Self {
            cache: Arc::new(RwLock::new(store)),
            source,
        }
    }

    // == Read-Through Lookup ==
    /// Serves `key` from the cache, falling back to the upstream source.
    ///
    /// Upstream failures are returned and nothing is cached for them.
    pub async fn lookup(&self, key: &str) -> Result<DataResponse> {
        let started = Instant::now();

        // Write lock: a hit reorders the store
        let cached = self.cache.write().await.get(key).cloned();
        if let Some(data) = cached {
            debug!("Cache hit for '{}'", key);
            return Ok(DataResponse::hit(data, elapsed_ms(started)));
        }

        debug!("Cache miss for '{}', fetching upstream", key);
        let data = self.source.fetch(key).await.map_err(|err| {
            warn!("Upstream fetch for '{}' failed: {}", key, err);
            err
        })?;

        let evicted = self
            .cache
            .write()
            .await
            .put(key.to_string(), data.clone());
        if let Some(evicted) = evicted {
            info!("Evicted '{}' to make room for '{}'", evicted.key, key);
        }

        Ok(DataResponse::miss(data, elapsed_ms(started)))
    }
}

impl AppState<SlowDataSource> {
    /// Creates a new AppState from configuration.
    ///
    /// Fails when the configured capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.cache_capacity, SlowDataSource::from_config(config))
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Handler for GET /api/data/:key
///
/// Returns the cached record or fetches, caches and returns a fresh one.
pub async fn data_handler<S: DataSource>(
    State(state): State<AppState<S>>,
    Path(req): Path<DataRequest>,
) -> Result<Json<DataResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    Ok(Json(state.lookup(&req.key).await?))
}

/// Handler for GET /cache/state
///
/// Returns every cached entry, most recently used first.
pub async fn state_handler<S: DataSource>(State(state): State<AppState<S>>) -> Json<StateResponse> {
    let cache = state.cache.read().await;
    Json(StateResponse::new(cache.snapshot()))
}

/// Handler for GET /cache/stats
///
/// Returns current cache statistics.
pub async fn stats_handler<S: DataSource>(State(state): State<AppState<S>>) -> Json<StatsResponse> {
    // Acquire read lock for stats
    let cache = state.cache.read().await;
    Json(StatsResponse::from(&cache.stats()))
}

/// Handler for POST /cache/config
///
/// Changes the capacity. The store is emptied and its counters zeroed.
pub async fn config_handler<S: DataSource>(
    State(state): State<AppState<S>>,
    Json(req): Json<ConfigRequest>,
) -> Result<Json<ConfigResponse>> {
    let capacity = req.capacity()?;

    let mut cache = state.cache.write().await;
    cache.reconfigure(capacity)?;
    info!("Cache reconfigured: capacity={}, contents cleared", capacity);

    Ok(Json(ConfigResponse::new(capacity)))
}

/// Handler for DELETE /cache
///
/// Empties the store and zeroes its counters. Capacity is kept.
pub async fn clear_handler<S: DataSource>(State(state): State<AppState<S>>) -> Json<ClearResponse> {
    let mut cache = state.cache.write().await;
    cache.clear();
    info!("Cache cleared");

    Json(ClearResponse::new())
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
