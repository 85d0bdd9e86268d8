//! Cache Module
//!
//! The entry mapping, its TTL policy, and the public cache handle.

mod entry;
mod handle;
mod store;


// Public surface
pub use handle::Cache;

// Internals; the store is also swept by the scrubber task
pub(crate) use entry::CacheEntry;
pub(crate) use store::CacheStore;
