use crate::cache::config::CacheConfig;
use crate::cache::entry::{CacheEntry, now_ms};
use crate::cache::metrics::CacheMetrics;
use crate::cache::store::CacheStore;
use lru::LruCache;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::Ordering;

/// Removes expired and version-stale entries. Returns the number evicted.
///
/// Shared by the background sweep thread and `Cache::purge_expired_now`;
/// deleting an already-absent key is a no-op, so a sweep interleaving with a
/// read-side eviction cannot double-delete.
pub(crate) fn purge_expired<T>(
    store: &Arc<RwLock<LruCache<String, CacheEntry<T>>>>,
    metrics: &Arc<CacheMetrics>,
    sizes: &Arc<RwLock<HashMap<String, usize>>>,
    config: &Arc<RwLock<CacheConfig>>,
    durable: Option<&Arc<dyn CacheStore>>,
) -> usize {
    let now = now_ms();
    let (version, prefix) = {
        let cfg = config.read();
        (cfg.version.clone(), cfg.key_prefix.clone())
    };

    let mut cache = store.write();
    let stale_keys: Vec<String> = cache
        .iter()
        .filter(|(_, e)| e.is_expired(now) || e.is_stale(&version))
        .map(|(k, _)| k.clone())
        .collect();

    let count = stale_keys.len();
    for key in stale_keys {
        cache.pop(&key);
        if let Some(sz) = sizes.write().remove(&key) {
            metrics.memory_bytes.fetch_sub(sz as u64, Ordering::Relaxed);
        }
        if let Some(d) = durable {
            if let Err(e) = d.delete(&format!("{prefix}{key}")) {
                log::warn!("cache: failed to delete persisted entry {key}: {e}");
            }
        }
    }
    if count > 0 {
        metrics.ttl_evictions.fetch_add(count as u64, Ordering::Relaxed);
    }
    count
}
