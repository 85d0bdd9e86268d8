//! Scrubcache - an in-process key/value cache with per-entry TTL expiration
//!
//! Entries expire after a configurable time-to-live and are reclaimed either
//! lazily when read or eagerly by an optional background scrubber. There is
//! no eviction by size, no persistence, and no wire protocol: this is a
//! bounded-staleness memoization layer for a single process.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Duration;
//!
//! use scrubcache::Cache;
//!
//! #[tokio::main]
//! async fn main() {
//!     // Entries default to a 5 minute TTL; expired ones are swept away
//!     // every minute by a background task.
//!     let cache: Cache<String, u64> =
//!         Cache::new(Duration::from_secs(300), Duration::from_secs(60));
//!
//!     cache.add("hits".to_string(), 1).await;
//!     assert_eq!(cache.get("hits").await, Some(1));
//!
//!     // A per-entry TTL overrides the default; zero means never expire.
//!     cache
//!         .add_with_expiry("pinned".to_string(), 2, Duration::ZERO)
//!         .await;
//!
//!     // Halts the scrubber; dropping the cache would do the same.
//!     cache.stop();
//! }
//! ```
//!
//! # Expiry model
//!
//! A `get` on an expired entry reports a miss but does not remove it, so
//! reads stay on the shared lock. [`Cache::len`] counts live entries only,
//! [`Cache::size`] counts everything still held, and the scrubber closes the
//! gap between the two on its period. With the scrubber disabled the cache
//! works on lazy expiry alone.

mod cache;
mod config;
mod tasks;

pub use cache::Cache;
pub use config::CacheConfig;
