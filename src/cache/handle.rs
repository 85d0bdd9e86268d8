//! Public Cache Handle
//!
//! The owning handle over the store and the optional background scrubber.
//! The handle exposes the store's operations directly and manages the
//! scrubber's lifecycle; the store never learns about the scrubber.

use std::borrow::Borrow;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::config::CacheConfig;
use crate::tasks::Scrubber;

/// A key/value cache with per-entry TTL expiration and optional background
/// scrubbing.
///
/// The handle exclusively owns its store for the store's entire lifetime;
/// the scrubber task holds only a weak back-reference, so halting it never
/// invalidates the store. All operations are safe to call from any number of
/// concurrent tasks: reads (`get`, `len`, `size`, `is_empty`) run under a
/// shared lock, writes (`add`, `add_with_expiry`) and the scrubber's sweep
/// under an exclusive one.
///
/// The handle is not `Clone`; share it by reference or wrap it in an `Arc`.
/// Dropping it halts the scrubber, as does an explicit [`stop`].
///
/// [`stop`]: Cache::stop
#[derive(Debug)]
pub struct Cache<K, V> {
    /// Shared store; the only strong reference lives here
    store: Arc<RwLock<CacheStore<K, V>>>,
    /// Background sweep task, present iff a positive cleanup interval was
    /// configured at construction
    scrubber: Option<Scrubber>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Creates a cache with the given default TTL and cleanup interval.
    ///
    /// A zero `default_ttl` means entries installed through [`add`] never
    /// expire. A positive `cleanup_interval` starts a background scrubber
    /// that removes expired entries on that period; zero disables it, in
    /// which case the cache relies on lazy expiry at read time alone.
    ///
    /// # Panics
    /// Panics if `cleanup_interval` is positive and this is called outside a
    /// Tokio runtime, since the scrubber is spawned onto the current runtime.
    ///
    /// [`add`]: Cache::add
    pub fn new(default_ttl: Duration, cleanup_interval: Duration) -> Self {
        let store = Arc::new(RwLock::new(CacheStore::new(default_ttl)));
        let scrubber =
            (!cleanup_interval.is_zero()).then(|| Scrubber::spawn(&store, cleanup_interval));

        Self { store, scrubber }
    }

    /// Creates a cache from a [`CacheConfig`].
    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.default_ttl, config.cleanup_interval)
    }

    /// Installs or overwrites the entry for `key` using the default TTL.
    ///
    /// Overwriting an existing key always resets its expiry relative to now;
    /// the prior expiry is discarded.
    pub async fn add(&self, key: K, value: V) {
        self.store.write().await.insert(key, value, None);
    }

    /// Installs or overwrites the entry for `key` with an explicit TTL,
    /// overriding the default for this entry alone.
    ///
    /// A zero `ttl` means the entry never expires. Overwrite semantics are
    /// identical to [`add`]: both go through the same installation path.
    ///
    /// [`add`]: Cache::add
    pub async fn add_with_expiry(&self, key: K, value: V, ttl: Duration) {
        self.store.write().await.insert(key, value, Some(ttl));
    }

    /// Retrieves a copy of the value stored under `key`.
    ///
    /// Returns `None` if the key was never added or its entry has expired.
    /// A lazily-expired entry is not removed by this call; it stays in the
    /// map (visible to [`size`]) until the scrubber sweeps it or an overwrite
    /// replaces it.
    ///
    /// The key may be any borrowed form of `K`, as with [`HashMap::get`]:
    /// a `Cache<String, _>` is queried with a `&str`.
    ///
    /// [`size`]: Cache::size
    /// [`HashMap::get`]: std::collections::HashMap::get
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.store.read().await.get(key)
    }

    /// Returns the number of entries that have not expired.
    ///
    /// This is a full scan under the shared lock.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    /// Returns the raw number of stored entries, including expired ones not
    /// yet swept. `size() - len()` is the reclaimable backlog.
    pub async fn size(&self) -> usize {
        self.store.read().await.size()
    }

    /// Returns true when the cache holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.store.read().await.is_empty()
    }
}

impl<K, V> Cache<K, V> {
    /// Halts the background scrubber, leaving the cache itself fully usable
    /// on lazy expiry alone.
    ///
    /// Idempotent and non-blocking: calling it repeatedly, with no scrubber
    /// configured, or concurrently with the drop-time halt is a no-op.
    pub fn stop(&self) {
        if let Some(scrubber) = &self.scrubber {
            scrubber.halt();
        }
    }
}

impl<K, V> Drop for Cache<K, V> {
    /// Halts the scrubber on every exit path of the owning scope.
    fn drop(&mut self) {
        self.stop();
    }
}
