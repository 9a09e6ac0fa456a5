use crate::cache::core::Cache;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::future::Future;
use std::time::Duration;

/// Fetch-through helper: returns the cached value for `key` when present and
/// valid, otherwise awaits `fetch`, caches the success value, and returns it.
///
/// Fetch errors are returned as-is and nothing is cached for them. Concurrent
/// callers racing on an uncached key each run their own fetch; there is no
/// single-flight coalescing at this layer.
pub async fn load_with_cache<T, E, F, Fut>(
    cache: &Cache<T>,
    key: &str,
    max_age: Option<Duration>,
    fetch: F,
) -> Result<T, E>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    if let Some(hit) = cache.get(key) {
        return Ok(hit);
    }
    let value = fetch().await?;
    cache.set(key, value.clone(), max_age);
    Ok(value)
}
