//! Configuration Module
//!
//! Cache construction parameters, loadable from environment variables.

use std::env;
use std::time::Duration;

/// Default TTL in seconds when none is configured
const DEFAULT_TTL_SECS: u64 = 300;

/// Default scrubber period in seconds when none is configured
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;

/// Cache construction parameters.
///
/// Both durations treat zero as "disabled": a zero `default_ttl` makes
/// entries never expire, a zero `cleanup_interval` runs no scrubber.
/// Durations are unsigned, so negative values are unrepresentable rather
/// than checked at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// TTL applied to entries installed without an explicit expiry
    pub default_ttl: Duration,
    /// Period of the background scrubber
    pub cleanup_interval: Duration,
}

impl CacheConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_DEFAULT_TTL_SECS` - default TTL in whole seconds (default: 300)
    /// - `CACHE_CLEANUP_INTERVAL_SECS` - scrubber period in whole seconds
    ///   (default: 60)
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self {
            default_ttl: secs_from_env("CACHE_DEFAULT_TTL_SECS", DEFAULT_TTL_SECS),
            cleanup_interval: secs_from_env(
                "CACHE_CLEANUP_INTERVAL_SECS",
                DEFAULT_CLEANUP_INTERVAL_SECS,
            ),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(DEFAULT_TTL_SECS),
            cleanup_interval: Duration::from_secs(DEFAULT_CLEANUP_INTERVAL_SECS),
        }
    }
}

/// Reads a whole-second duration from `var`, falling back to `default_secs`.
fn secs_from_env(var: &str, default_secs: u64) -> Duration {
    let secs = env::var(var)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default_secs);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl, Duration::from_secs(300));
        assert_eq!(config.cleanup_interval, Duration::from_secs(60));
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test the fallbacks
        env::remove_var("CACHE_DEFAULT_TTL_SECS");
        env::remove_var("CACHE_CLEANUP_INTERVAL_SECS");

        let config = CacheConfig::from_env();
        assert_eq!(config, CacheConfig::default());
    }

    #[test]
    fn test_secs_from_env_ignores_garbage() {
        env::set_var("CACHE_TEST_GARBAGE_SECS", "not-a-number");

        let duration = secs_from_env("CACHE_TEST_GARBAGE_SECS", 42);
        assert_eq!(duration, Duration::from_secs(42));

        env::remove_var("CACHE_TEST_GARBAGE_SECS");
    }
}
