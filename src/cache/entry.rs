//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single stored value together with its expiry instant.
///
/// The expiry is a monotonic [`Instant`], so adjustments to the system clock
/// can neither expire nor revive an entry.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry<V> {
    /// The stored value
    pub(crate) value: V,
    /// Expiration instant; `None` means the entry never expires
    pub(crate) expires_at: Option<Instant>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with an optional TTL.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Time until expiry, or `None` for an entry that never expires
    pub(crate) fn new(value: V, ttl: Option<Duration>) -> Self {
        Self {
            value,
            expires_at: ttl.map(|ttl| Instant::now() + ttl),
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has expired.
    ///
    /// Boundary condition: an entry is considered expired when the current
    /// instant is greater than or equal to its expiry instant, so an entry is
    /// gone the moment its TTL has fully elapsed.
    ///
    /// # Returns
    /// - `true` if the entry has an expiry and it has been reached
    /// - `false` if the entry never expires or its TTL has not yet elapsed
    pub(crate) fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Instant::now() >= expires_at,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new("test_value", None);

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let entry = CacheEntry::new("test_value", Some(Duration::from_secs(60)));

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_some());
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = CacheEntry::new("test_value", Some(Duration::from_millis(50)));

        assert!(!entry.is_expired());

        // Wait for expiration
        sleep(Duration::from_millis(120));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_entry_without_ttl_never_expires() {
        let entry = CacheEntry::new("test_value", None);

        sleep(Duration::from_millis(50));

        assert!(!entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        // An entry whose expiry is exactly now must already count as expired
        let entry = CacheEntry {
            value: "test",
            expires_at: Some(Instant::now()),
        };

        assert!(entry.is_expired(), "entry should be expired at the boundary");
    }
}
