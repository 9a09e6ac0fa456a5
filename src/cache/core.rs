use crate::cache::config::CacheConfig;
use crate::cache::entry::{CacheEntry, now_ms};
use crate::cache::metrics::{CacheMetrics, CacheMetricsSnapshot};
use crate::cache::policy::purge_expired;
use crate::cache::size::approximate_entry_size;
use crate::cache::store::CacheStore;
use lru::LruCache;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

/// Aggregate view over the live entries, computed on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    pub total_items: usize,
    pub valid_items: usize,
    pub expired_items: usize,
    pub total_hits: u64,
    /// `total_hits / total_items`; 0 for an empty cache.
    pub hit_rate: f64,
    /// Serialized-size estimate, not exact.
    pub memory_bytes: u64,
}

/// A thread-safe, bounded, TTL-and-version-aware cache with an optional
/// durable mirror.
///
/// The in-memory layer is always authoritative: mirror failures are logged
/// and never surface to callers. Access order in the backing `LruCache`
/// tracks `last_accessed`, so the capacity victim is the least recently read
/// entry.
pub struct Cache<T> {
    store: Arc<RwLock<LruCache<String, CacheEntry<T>>>>,
    config: Arc<RwLock<CacheConfig>>, // runtime adjustable
    metrics: Arc<CacheMetrics>,
    sizes: Arc<RwLock<HashMap<String, usize>>>,
    durable: Option<Arc<dyn CacheStore>>,
}

impl<T> Clone for Cache<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            config: self.config.clone(),
            metrics: self.metrics.clone(),
            sizes: self.sizes.clone(),
            durable: self.durable.clone(),
        }
    }
}

impl<T> Cache<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    /// Creates a memory-only cache with the given capacity and starts the
    /// sweep task.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::with_config(CacheConfig { capacity, ..Default::default() })
    }

    /// Creates a memory-only cache with the provided configuration.
    #[must_use]
    pub fn with_config(config: CacheConfig) -> Self {
        Self::build(config, None)
    }

    /// Creates a cache mirrored to a durable store. Entries persisted under
    /// the configured prefix are loaded eagerly; anything already expired or
    /// written under another version is discarded on the spot.
    #[must_use]
    pub fn with_store(config: CacheConfig, store: Arc<dyn CacheStore>) -> Self {
        Self::build(config, Some(store))
    }

    fn build(config: CacheConfig, durable: Option<Arc<dyn CacheStore>>) -> Self {
        let cache = Cache {
            store: Arc::new(RwLock::new(LruCache::new(
                NonZeroUsize::new(config.capacity.max(1))
                    .unwrap_or_else(|| NonZeroUsize::new(1).expect("NonZeroUsize(1) must exist")),
            ))),
            config: Arc::new(RwLock::new(config)),
            metrics: Arc::new(CacheMetrics::default()),
            sizes: Arc::new(RwLock::new(HashMap::new())),
            durable,
        };
        cache.load_persisted();

        // Spawn a background thread for the periodic sweep
        let store_clone = cache.store.clone();
        let metrics_clone = cache.metrics.clone();
        let sizes_clone = cache.sizes.clone();
        let config_clone = cache.config.clone();
        let durable_clone = cache.durable.clone();
        std::thread::spawn(move || {
            loop {
                let interval = config_clone.read().sweep_interval;
                std::thread::sleep(interval);
                purge_expired(
                    &store_clone,
                    &metrics_clone,
                    &sizes_clone,
                    &config_clone,
                    durable_clone.as_ref(),
                );
            }
        });

        cache
    }

    /// Inserts or overwrites a slot. At capacity, the least recently accessed
    /// entry is evicted first so the size bound always holds.
    pub fn set(&self, key: &str, data: T, custom_max_age: Option<Duration>) {
        let (max_age, version) = {
            let cfg = self.config.read();
            (custom_max_age.unwrap_or(cfg.default_max_age), cfg.version.clone())
        };
        self.evict_for_capacity(key);

        let entry = CacheEntry::new(data, max_age, version);
        let approx = approximate_entry_size(&entry.data);
        {
            let mut sizes = self.sizes.write();
            if let Some(prev) = sizes.insert(key.to_owned(), approx) {
                self.metrics.memory_bytes.fetch_sub(prev as u64, Ordering::Relaxed);
            }
            self.metrics.memory_bytes.fetch_add(approx as u64, Ordering::Relaxed);
        }
        self.persist(key, &entry);
        self.store.write().put(key.to_owned(), entry);
        self.metrics.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Retrieves a value. Returns `None` for absent, expired, or
    /// version-stale entries; the latter two are evicted as a side effect.
    pub fn get(&self, key: &str) -> Option<T> {
        enum Read<T> {
            Missing,
            Stale,
            Hit(T),
        }

        let version = self.config.read().version.clone();
        let now = now_ms();
        let read = {
            let mut guard = self.store.write();
            let read = match guard.get_mut(key) {
                None => Read::Missing,
                Some(entry) if entry.is_expired(now) || entry.is_stale(&version) => Read::Stale,
                Some(entry) => {
                    entry.hits += 1;
                    entry.last_accessed = now;
                    Read::Hit(entry.data.clone())
                }
            };
            if matches!(read, Read::Stale) {
                // Lazy eviction on access
                guard.pop(key);
            }
            read
        };

        match read {
            Read::Missing => {
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
            Read::Stale => {
                if let Some(sz) = self.sizes.write().remove(key) {
                    self.metrics.memory_bytes.fetch_sub(sz as u64, Ordering::Relaxed);
                }
                self.metrics.ttl_evictions.fetch_add(1, Ordering::Relaxed);
                self.metrics.misses.fetch_add(1, Ordering::Relaxed);
                self.delete_persisted(key);
                None
            }
            Read::Hit(value) => {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
        }
    }

    /// Removes a slot from memory and the mirror. Returns whether a removal
    /// occurred. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> bool {
        let removed = self.store.write().pop(key).is_some();
        if removed {
            self.metrics.removes.fetch_add(1, Ordering::Relaxed);
            if let Some(sz) = self.sizes.write().remove(key) {
                self.metrics.memory_bytes.fetch_sub(sz as u64, Ordering::Relaxed);
            }
        }
        self.delete_persisted(key);
        removed
    }

    /// Same expiry/version path as `get`, not a raw existence probe.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Empties memory and removes only this cache's prefixed keys from the
    /// mirror; unrelated keys sharing the store stay intact.
    pub fn clear(&self) {
        let prefix = self.config.read().key_prefix.clone();
        self.store.write().clear();
        self.sizes.write().clear();
        self.metrics.memory_bytes.store(0, Ordering::Relaxed);
        if let Some(d) = &self.durable {
            match d.keys() {
                Ok(keys) => {
                    for full in keys.iter().filter(|k| k.starts_with(&prefix)) {
                        if let Err(e) = d.delete(full) {
                            log::warn!("cache: failed to delete persisted entry {full}: {e}");
                        }
                    }
                }
                Err(e) => log::warn!("cache: failed to enumerate persisted keys: {e}"),
            }
        }
    }

    /// Sets the active version and unconditionally clears all entries. A
    /// version bump always invalidates everything.
    pub fn refresh_version(&self, new_version: &str) {
        self.config.write().version = new_version.to_owned();
        self.clear();
    }

    /// Aggregate view over the live entries.
    pub fn stats(&self) -> CacheStats {
        let version = self.config.read().version.clone();
        let now = now_ms();
        let guard = self.store.read();
        let mut valid = 0usize;
        let mut expired = 0usize;
        let mut total_hits = 0u64;
        for (_, entry) in guard.iter() {
            if entry.is_expired(now) || entry.is_stale(&version) {
                expired += 1;
            } else {
                valid += 1;
            }
            total_hits += entry.hits;
        }
        let total = guard.len();
        CacheStats {
            total_items: total,
            valid_items: valid,
            expired_items: expired,
            total_hits,
            hit_rate: if total == 0 { 0.0 } else { total_hits as f64 / total as f64 },
            memory_bytes: self.metrics.memory_bytes.load(Ordering::Relaxed),
        }
    }

    /// Force a sweep now. Returns the number evicted.
    pub fn purge_expired_now(&self) -> usize {
        purge_expired(&self.store, &self.metrics, &self.sizes, &self.config, self.durable.as_ref())
    }

    /// Get a snapshot of metrics.
    pub fn metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Runtime config updates
    pub fn set_capacity(&self, capacity: usize) {
        let nz = NonZeroUsize::new(capacity.max(1))
            .unwrap_or_else(|| NonZeroUsize::new(1).expect("NonZeroUsize(1) must exist"));
        self.config.write().capacity = nz.get();
        self.store.write().resize(nz);
    }

    pub fn set_sweep_interval(&self, interval: Duration) {
        self.config.write().sweep_interval = interval.max(Duration::from_millis(1));
    }

    /// Makes room for one incoming key. Overwrites do not grow the map, so
    /// they never trigger an eviction.
    fn evict_for_capacity(&self, incoming: &str) {
        let mut guard = self.store.write();
        if guard.len() < guard.cap().get() || guard.contains(incoming) {
            return;
        }
        if let Some((victim, _)) = guard.pop_lru() {
            drop(guard);
            self.metrics.lru_evictions.fetch_add(1, Ordering::Relaxed);
            if let Some(sz) = self.sizes.write().remove(&victim) {
                self.metrics.memory_bytes.fetch_sub(sz as u64, Ordering::Relaxed);
            }
            self.delete_persisted(&victim);
        }
    }

    fn load_persisted(&self) {
        let Some(d) = &self.durable else { return };
        let (prefix, version, capacity) = {
            let cfg = self.config.read();
            (cfg.key_prefix.clone(), cfg.version.clone(), cfg.capacity)
        };
        let keys = match d.keys() {
            Ok(keys) => keys,
            Err(e) => {
                log::warn!("cache: failed to enumerate persisted keys: {e}");
                return;
            }
        };
        let now = now_ms();
        let mut loaded = 0usize;
        for full in keys.iter().filter(|k| k.starts_with(&prefix)) {
            if loaded >= capacity {
                break;
            }
            let key = &full[prefix.len()..];
            let raw = match d.get(full) {
                Ok(Some(raw)) => raw,
                Ok(None) => continue,
                Err(e) => {
                    log::warn!("cache: failed to read persisted entry {key}: {e}");
                    continue;
                }
            };
            match serde_json::from_str::<CacheEntry<T>>(&raw) {
                Ok(entry) if !entry.is_expired(now) && !entry.is_stale(&version) => {
                    let approx = approximate_entry_size(&entry.data);
                    self.sizes.write().insert(key.to_owned(), approx);
                    self.metrics.memory_bytes.fetch_add(approx as u64, Ordering::Relaxed);
                    self.store.write().put(key.to_owned(), entry);
                    loaded += 1;
                }
                Ok(_) => {
                    // expired or version-stale at load time
                    let _ = d.delete(full);
                }
                Err(e) => {
                    log::warn!("cache: discarding unreadable persisted entry {key}: {e}");
                    let _ = d.delete(full);
                }
            }
        }
    }

    fn persist(&self, key: &str, entry: &CacheEntry<T>) {
        let Some(d) = &self.durable else { return };
        let prefixed = format!("{}{}", self.config.read().key_prefix, key);
        match serde_json::to_string(entry) {
            Ok(raw) => {
                if let Err(e) = d.set(&prefixed, &raw) {
                    log::warn!("cache: failed to persist {key}: {e}");
                }
            }
            Err(e) => log::warn!("cache: entry for {key} is not serializable: {e}"),
        }
    }

    fn delete_persisted(&self, key: &str) {
        let Some(d) = &self.durable else { return };
        let prefixed = format!("{}{}", self.config.read().key_prefix, key);
        if let Err(e) = d.delete(&prefixed) {
            log::warn!("cache: failed to delete persisted entry {key}: {e}");
        }
    }
}
