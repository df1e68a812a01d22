//! Key-value cache with per-entry expiration.

use super::entry::CacheEntry;
use crate::config::CacheConfig;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

/// In-memory cache keyed by string with lazy expiration.
///
/// There is no capacity bound and no LRU policy. Each instance is independent,
/// so two processes (or two instances) never share invalidation.
///
/// # Example
///
/// ```rust
/// use hub_core::TtlCache;
/// use std::time::Duration;
///
/// let cache = TtlCache::new();
/// cache.set_with_ttl("k", vec![1, 2, 3], Duration::from_secs(1));
/// assert_eq!(cache.get("k"), Some(vec![1, 2, 3]));
/// assert_eq!(cache.get("missing"), None);
/// ```
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
    default_ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    /// Create a cache with the default TTL of one hour.
    pub fn new() -> Self {
        Self::with_default_ttl(CacheConfig::DEFAULT_TTL)
    }

    /// Create a cache with a custom default TTL.
    pub fn with_default_ttl(default_ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            default_ttl,
        }
    }

    /// TTL applied by [`TtlCache::set`].
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Store a value with the default TTL, replacing any previous entry.
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    /// Store a value with an explicit TTL, replacing any previous entry.
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        debug!("Cache set {} (ttl {:?})", key, ttl);
        self.lock().insert(key, CacheEntry::new(value, ttl));
    }

    /// Get a value if present and unexpired.
    ///
    /// An expired entry is removed as a side effect.
    pub fn get(&self, key: &str) -> Option<V> {
        self.get_entry(key).map(|entry| entry.value)
    }

    /// Get the full entry if present and unexpired.
    pub fn get_entry(&self, key: &str) -> Option<CacheEntry<V>> {
        let now = Instant::now();
        let mut entries = self.lock();

        match entries.get(key) {
            None => None,
            Some(entry) if entry.is_expired_at(now) => {
                debug!("Cache entry {} expired, evicting", key);
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.clone()),
        }
    }

    /// Check for a live entry without cloning it. Evicts like [`TtlCache::get`].
    pub fn contains(&self, key: &str) -> bool {
        let now = Instant::now();
        let mut entries = self.lock();

        match entries.get(key) {
            None => false,
            Some(entry) if entry.is_expired_at(now) => {
                entries.remove(key);
                false
            }
            Some(_) => true,
        }
    }

    /// Number of stored entries, including expired ones not yet read.
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    /// Remove a single key. Returns whether an entry was present.
    pub fn invalidate(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Remove every entry.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        // The map holds no invariants a panicking writer could break.
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<V: Clone> Default for TtlCache<V> {
    fn default() -> Self {
        Self::new()
    }
}
