//! In-memory caching for computed content.
//!
//! A [`TtlCache`] is constructed explicitly and handed to whoever needs it;
//! there is no process-wide instance. Entries expire lazily: a stale entry is
//! dropped the first time it is read, never by a background sweep.

mod entry;
mod ttl;

pub use entry::CacheEntry;
pub use ttl::TtlCache;
