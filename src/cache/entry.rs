use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A single cache slot.
///
/// `hits` and `last_accessed` are mutated in place on every successful read;
/// `last_accessed` drives the eviction order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    pub data: T,
    /// Creation time, ms since the epoch.
    pub timestamp: i64,
    /// Absolute expiry, ms since the epoch; always greater than `timestamp`.
    pub expiry: i64,
    /// Generation tag the entry was written under.
    pub version: String,
    /// Successful reads served from this slot.
    pub hits: u64,
    /// Last successful read, ms since the epoch.
    pub last_accessed: i64,
}

impl<T> CacheEntry<T> {
    #[must_use]
    pub fn new(data: T, max_age: Duration, version: String) -> Self {
        let now = now_ms();
        let age_ms = i64::try_from(max_age.as_millis()).unwrap_or(i64::MAX);
        Self {
            data,
            timestamp: now,
            expiry: now.saturating_add(age_ms.max(1)),
            version,
            hits: 0,
            last_accessed: now,
        }
    }

    #[must_use]
    pub fn is_expired(&self, now: i64) -> bool {
        now > self.expiry
    }

    #[must_use]
    pub fn is_stale(&self, version: &str) -> bool {
        self.version != version
    }
}

/// Current wall-clock time in ms since the epoch.
#[must_use]
pub(crate) fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
