//! Slow Data Source
//!
//! Simulates a backing store with random per-request latency.

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::config::Config;
use crate::error::Result;
use crate::source::{DataSource, FetchedData};

/// Upstream stand-in that sleeps a random delay before answering.
#[derive(Debug, Clone)]
pub struct SlowDataSource {
    min_delay: Duration,
    max_delay: Duration,
}

impl SlowDataSource {
    /// Creates a source whose latency is uniform in `[min_delay, max_delay]`.
    ///
    /// An inverted range is swapped rather than rejected.
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        if min_delay > max_delay {
            Self {
                min_delay: max_delay,
                max_delay: min_delay,
            }
        } else {
            Self {
                min_delay,
                max_delay,
            }
        }
    }

    /// Creates a source from the configured latency bounds.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Duration::from_millis(config.fetch_min_delay_ms),
            Duration::from_millis(config.fetch_max_delay_ms),
        )
    }

    /// Picks the latency for one fetch.
    pub fn random_delay(&self) -> Duration {
        if self.min_delay == self.max_delay {
            return self.min_delay;
        }
        rand::rng().random_range(self.min_delay..=self.max_delay)
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    pub fn max_delay(&self) -> Duration {
        self.max_delay
    }
}

impl Default for SlowDataSource {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl DataSource for SlowDataSource {
    async fn fetch(&self, key: &str) -> Result<FetchedData> {
        let delay = self.random_delay();
        debug!("Fetching '{}' from slow source ({} ms)", key, delay.as_millis());
        tokio::time::sleep(delay).await;
        Ok(FetchedData::for_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_default_bounds() {
        let source = SlowDataSource::default();
        assert_eq!(source.min_delay(), Duration::from_millis(800));
        assert_eq!(source.max_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_inverted_range_is_swapped() {
        let source = SlowDataSource::new(Duration::from_millis(50), Duration::from_millis(10));
        assert_eq!(source.min_delay(), Duration::from_millis(10));
        assert_eq!(source.max_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_random_delay_within_bounds() {
        let source = SlowDataSource::new(Duration::from_millis(800), Duration::from_millis(1500));
        for _ in 0..200 {
            let delay = source.random_delay();
            assert!(delay >= Duration::from_millis(800));
            assert!(delay <= Duration::from_millis(1500));
        }
    }

    #[tokio::test]
    async fn test_fetch_waits_and_returns_record() {
        let source = SlowDataSource::new(Duration::from_millis(20), Duration::from_millis(30));

        let started = Instant::now();
        let data = source.fetch("alpha").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(data.key, "alpha");
        assert_eq!(data.value, "Data for alpha");
    }

    #[tokio::test]
    async fn test_zero_delay_fetch() {
        let source = SlowDataSource::new(Duration::ZERO, Duration::ZERO);
        let data = source.fetch("beta").await.unwrap();
        assert_eq!(data.value, "Data for beta");
    }
}
