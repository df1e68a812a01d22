//! Cache entry with its own time-to-live.

use std::time::{Duration, Instant};

/// A cached value with the moment it was stored and how long it stays valid.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value.
    pub value: V,
    /// When the value was stored.
    pub stored_at: Instant,
    /// How long the value stays readable.
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    /// Create an entry stored now.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            stored_at: Instant::now(),
            ttl,
        }
    }

    /// An entry is readable only while `now - stored_at < ttl`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.stored_at) >= self.ttl
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Time elapsed since the value was stored.
    pub fn age(&self) -> Duration {
        self.stored_at.elapsed()
    }
}
