//! TTL Scrubber Task
//!
//! Background task that periodically removes expired cache entries.

use std::hash::Hash;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tokio::sync::{watch, RwLock};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use tracing::debug;

use crate::cache::CacheStore;

/// Handle to the background sweep task.
///
/// The spawned task ticks on the configured period; each tick takes the
/// write lock and deletes every entry whose expiry has been reached. It
/// holds only a [`Weak`] back-reference to the store, so it never extends
/// the store's lifetime, and it exits as soon as any of these happen:
/// the halt signal fires, the halt sender is dropped, or the store itself
/// is deallocated.
#[derive(Debug)]
pub(crate) struct Scrubber {
    /// Halt signal; sending `true` tells the task to exit. Dropping the
    /// sender has the same effect.
    halt: watch::Sender<bool>,
    /// The spawned sweep task
    task: JoinHandle<()>,
}

impl Scrubber {
    /// Spawns the sweep task on the current Tokio runtime.
    ///
    /// The first sweep happens one full period after construction, matching
    /// a plain ticker rather than tokio's fire-immediately interval.
    ///
    /// # Arguments
    /// * `store` - The store to sweep; only a weak reference is retained
    /// * `period` - Time between sweeps; must be positive
    pub(crate) fn spawn<K, V>(store: &Arc<RwLock<CacheStore<K, V>>>, period: Duration) -> Self
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Clone + Send + Sync + 'static,
    {
        let (halt, mut halted) = watch::channel(false);
        let store: Weak<RwLock<CacheStore<K, V>>> = Arc::downgrade(store);

        let task = tokio::spawn(async move {
            debug!(?period, "scrubber started");

            let mut ticker = interval_at(Instant::now() + period, period);

            loop {
                tokio::select! {
                    // Completes on an explicit halt, and with an error when
                    // the sender is dropped; both mean exit
                    _ = halted.changed() => break,
                    _ = ticker.tick() => {
                        let Some(store) = store.upgrade() else { break };
                        let removed = store.write().await.sweep();
                        if removed > 0 {
                            debug!(removed, "swept expired entries");
                        }
                    }
                }
            }

            debug!("scrubber halted");
        });

        Self { halt, task }
    }

    /// Signals the task to exit.
    ///
    /// Never blocks, and is safe to call any number of times; repeat sends
    /// and sends after the task has already exited are ignored.
    pub(crate) fn halt(&self) {
        let _ = self.halt.send(true);
    }

    /// Whether the sweep task has run to completion.
    #[cfg(test)]
    pub(crate) fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Scrubber {
    /// Aborts the task outright. Halting through the watch channel only takes
    /// effect once the task is next polled; after the handle is gone nothing
    /// is left to observe that, so the abort keeps the task from lingering
    /// until its next tick.
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store(default_ttl: Duration) -> Arc<RwLock<CacheStore<String, String>>> {
        Arc::new(RwLock::new(CacheStore::new(default_ttl)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrubber_sweeps_expired_entries() {
        let store = test_store(Duration::from_millis(50));
        store
            .write()
            .await
            .insert("expire_soon".to_string(), "value".to_string(), None);

        let scrubber = Scrubber::spawn(&store, Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(150)).await;

        assert_eq!(store.read().await.size(), 0);

        scrubber.halt();
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrubber_preserves_live_entries() {
        let store = test_store(Duration::from_secs(300));
        {
            let mut store = store.write().await;
            store.insert("long_lived".to_string(), "value".to_string(), None);
            store.insert("pinned".to_string(), "value".to_string(), Some(Duration::ZERO));
            store.insert(
                "short_lived".to_string(),
                "value".to_string(),
                Some(Duration::from_millis(50)),
            );
        }

        let scrubber = Scrubber::spawn(&store, Duration::from_millis(100));

        tokio::time::sleep(Duration::from_millis(150)).await;

        let store = store.read().await;
        assert_eq!(store.size(), 2);
        assert_eq!(store.get("long_lived"), Some("value".to_string()));
        assert_eq!(store.get("pinned"), Some("value".to_string()));
        assert_eq!(store.get("short_lived"), None);

        scrubber.halt();
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrubber_first_sweep_waits_one_period() {
        let store = test_store(Duration::from_millis(10));
        store
            .write()
            .await
            .insert("key".to_string(), "value".to_string(), None);

        let scrubber = Scrubber::spawn(&store, Duration::from_millis(100));

        // Expired but not yet swept halfway through the first period
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(store.read().await.size(), 1);
        assert_eq!(store.read().await.len(), 0);

        // Swept once the first tick has fired
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert_eq!(store.read().await.size(), 0);

        scrubber.halt();
    }

    #[tokio::test(start_paused = true)]
    async fn test_halt_stops_task() {
        let store = test_store(Duration::from_secs(300));
        let scrubber = Scrubber::spawn(&store, Duration::from_millis(100));

        assert!(!scrubber.is_finished());

        scrubber.halt();
        tokio::time::sleep(Duration::from_millis(1)).await;

        assert!(scrubber.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrubber_exits_when_store_dropped() {
        let store = test_store(Duration::from_secs(300));
        let scrubber = Scrubber::spawn(&store, Duration::from_millis(100));

        drop(store);
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(scrubber.is_finished());
    }

    #[tokio::test(start_paused = true)]
    async fn test_scrubber_survives_empty_store() {
        let store = test_store(Duration::from_secs(300));
        let scrubber = Scrubber::spawn(&store, Duration::from_millis(50));

        // Several sweeps over an empty store must neither panic nor exit
        tokio::time::sleep(Duration::from_millis(500)).await;

        assert!(!scrubber.is_finished());
        assert_eq!(store.read().await.size(), 0);

        scrubber.halt();
    }
}
