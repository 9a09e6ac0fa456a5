use std::time::Duration;

/// Configuration for a cache instance.
///
/// Constructed explicitly and passed to `Cache::with_config`; there are no
/// module-level default instances, so tests and parallel consumers each wire
/// their own cache.
#[derive(Clone, Debug)]
pub struct CacheConfig {
    /// Maximum number of entries held in memory.
    pub capacity: usize,
    /// TTL applied when `set` is called without an explicit max age.
    pub default_max_age: Duration,
    /// Cache generation tag; entries written under another version read as misses.
    pub version: String,
    /// Interval of the background sweep that evicts expired entries.
    pub sweep_interval: Duration,
    /// Key prefix namespacing this cache in a shared durable store.
    pub key_prefix: String,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            default_max_age: Duration::from_secs(5 * 60),
            version: "1.0.0".to_string(),
            sweep_interval: Duration::from_secs(60),
            key_prefix: "cache_".to_string(),
        }
    }
}
