//! Cache Store Module
//!
//! The entry mapping and its TTL policy. The store is purely synchronous and
//! holds no lock of its own; the public handle serializes access through a
//! reader/writer lock and the scrubber task mutates it through the same lock.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use crate::cache::CacheEntry;

// == Cache Store ==
/// Key-value storage with per-entry TTL expiration.
///
/// Expiration is evaluated lazily at read time and eagerly at sweep time,
/// never synchronously at write time of other entries. The map may therefore
/// transiently hold logically-expired entries between sweeps; [`len`] and
/// [`size`] make that distinction observable.
///
/// [`len`]: CacheStore::len
/// [`size`]: CacheStore::size
#[derive(Debug)]
pub(crate) struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// TTL applied when an entry is installed without an explicit override;
    /// zero means entries never expire
    default_ttl: Duration,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty store.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL used by inserts without an override; zero
    ///   disables time-based expiration for those entries
    pub(crate) fn new(default_ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
        }
    }

    // == Insert ==
    /// Installs or overwrites the entry for `key`.
    ///
    /// This is the single installation path: both the default-TTL and
    /// explicit-TTL public operations funnel through it, so their overwrite
    /// semantics are identical. Overwriting always resets the expiry relative
    /// to now; the prior expiry is discarded.
    ///
    /// # Arguments
    /// * `key` - The key to store under
    /// * `value` - The value to store
    /// * `ttl` - Per-entry TTL override, or `None` to use the default;
    ///   an effective TTL of zero means the entry never expires
    pub(crate) fn insert(&mut self, key: K, value: V, ttl: Option<Duration>) {
        let effective = ttl.unwrap_or(self.default_ttl);
        let ttl = if effective.is_zero() {
            None
        } else {
            Some(effective)
        };

        self.entries.insert(key, CacheEntry::new(value, ttl));
    }

    // == Get ==
    /// Retrieves a copy of the value stored under `key`.
    ///
    /// Returns `None` if the key is absent or its entry has expired. An
    /// expired entry is *not* removed here: this method takes `&self` so it
    /// can run under a shared lock with predictable cost, leaving removal to
    /// the scrubber or to a later overwrite.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone())
    }

    // == Length ==
    /// Returns the number of entries that have not expired (full scan).
    pub(crate) fn len(&self) -> usize {
        self.entries
            .values()
            .filter(|entry| !entry.is_expired())
            .count()
    }

    // == Size ==
    /// Returns the raw number of stored entries, counting expired ones that
    /// have not been swept yet. Lets callers observe memory pressure
    /// independent of logical validity.
    pub(crate) fn size(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true when the store holds no live entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // == Sweep ==
    /// Removes every entry whose expiry is set and has been reached.
    ///
    /// Entries without an expiry are never collected. Returns the number of
    /// entries removed.
    pub(crate) fn sweep(&mut self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired());
        before - self.entries.len()
    }
}
