//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial number of entries the cache can hold
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Lower bound of simulated upstream latency in milliseconds
    pub fetch_min_delay_ms: u64,
    /// Upper bound of simulated upstream latency in milliseconds
    pub fetch_max_delay_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Initial cache capacity (default: 3)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `FETCH_MIN_DELAY_MS` - Minimum upstream latency (default: 800)
    /// - `FETCH_MAX_DELAY_MS` - Maximum upstream latency (default: 1500)
    ///
    /// Unparseable values fall back to their defaults. A zero capacity is
    /// passed through and rejected when the store is built.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_capacity: env_or("CACHE_CAPACITY", defaults.cache_capacity),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            fetch_min_delay_ms: env_or("FETCH_MIN_DELAY_MS", defaults.fetch_min_delay_ms),
            fetch_max_delay_ms: env_or("FETCH_MAX_DELAY_MS", defaults.fetch_max_delay_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 3,
            server_port: 5000,
            fetch_min_delay_ms: 800,
            fetch_max_delay_ms: 1500,
        }
    }
}

/// Reads and parses `name`, falling back to `default`.
fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.cache_capacity, 3);
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.fetch_min_delay_ms, 800);
        assert_eq!(config.fetch_max_delay_ms, 1500);
    }

    // Env vars are process-global, so every env case lives in one test
    #[test]
    fn test_config_from_env() {
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
        env::remove_var("FETCH_MIN_DELAY_MS");
        env::remove_var("FETCH_MAX_DELAY_MS");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("CACHE_CAPACITY", "8");
        env::set_var("SERVER_PORT", "not-a-port");
        env::set_var("FETCH_MIN_DELAY_MS", " 10 ");
        let config = Config::from_env();
        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.server_port, 5000);
        assert_eq!(config.fetch_min_delay_ms, 10);
        assert_eq!(config.fetch_max_delay_ms, 1500);

        env::remove_var("CACHE_CAPACITY");
        env::remove_var("SERVER_PORT");
        env::remove_var("FETCH_MIN_DELAY_MS");
    }
}
