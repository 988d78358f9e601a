//! Upstream Source Module
//!
//! The latency-bearing backend that the cache sits in front of.

mod slow;

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;

pub use slow::SlowDataSource;

// == Fetched Data ==
/// A record produced by the upstream source and cached as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchedData {
    /// The key this record was fetched for
    pub key: String,
    /// The payload
    pub value: String,
    /// When the upstream produced the record
    pub fetched_at: DateTime<Utc>,
}

impl FetchedData {
    /// Builds the record the upstream returns for `key`.
    pub fn for_key(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            value: format!("Data for {}", key),
            key,
            fetched_at: Utc::now(),
        }
    }
}

// == Data Source Trait ==
/// Contract for anything that can produce a value on a cache miss.
///
/// Fetches may take arbitrarily long and may run concurrently for distinct
/// keys. Errors are surfaced to the caller and never cached.
pub trait DataSource: Clone + Send + Sync + 'static {
    /// Produces the value for `key`.
    fn fetch(&self, key: &str) -> impl Future<Output = Result<FetchedData>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetched_data_for_key() {
        let data = FetchedData::for_key("user:1");
        assert_eq!(data.key, "user:1");
        assert_eq!(data.value, "Data for user:1");
    }

    #[test]
    fn test_fetched_data_serializes_camel_case() {
        let data = FetchedData::for_key("k");
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["key"], "k");
        assert_eq!(json["value"], "Data for k");
        assert!(json["fetchedAt"].is_string());
        assert!(json.get("fetched_at").is_none());
    }
}
