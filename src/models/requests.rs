//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming path parameters and request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::MAX_KEY_LENGTH;
use crate::error::{CacheError, Result};

/// Path parameters for the data lookup (GET /api/data/:key)
#[derive(Debug, Clone, Deserialize)]
pub struct DataRequest {
    /// The key to look up
    pub key: String,
}

impl DataRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        None
    }
}

/// Request body for the reconfiguration (POST /cache/config)
///
/// `capacity` is kept as raw JSON so that strings, fractions and negative
/// numbers reach validation instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigRequest {
    /// Requested capacity
    #[serde(default)]
    pub capacity: Option<Value>,
}

impl ConfigRequest {
    /// Returns the requested capacity if it is a positive integer.
    pub fn capacity(&self) -> Result<usize> {
        let raw = match &self.capacity {
            None | Some(Value::Null) => {
                return Err(CacheError::InvalidCapacity(
                    "capacity is required".to_string(),
                ))
            }
            Some(raw) => raw,
        };

        raw.as_u64()
            .filter(|&capacity| capacity > 0)
            .and_then(|capacity| usize::try_from(capacity).ok())
            .ok_or_else(|| {
                CacheError::InvalidCapacity(format!(
                    "capacity must be a positive integer, got {}",
                    raw
                ))
            })
    }
}
