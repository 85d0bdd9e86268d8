//! Background Tasks Module
//!
//! Background work that runs alongside the cache.
//!
//! # Tasks
//! - Scrubber: removes expired entries on a configured period

mod scrubber;

pub(crate) use scrubber::Scrubber;
