mod config;
mod core;
mod entry;
mod load;
mod metrics;
mod policy;
mod size;
mod store;

pub use config::CacheConfig;
pub use core::{Cache, CacheStats};
pub use entry::CacheEntry;
pub use load::load_with_cache;
pub use metrics::{CacheMetrics, CacheMetricsSnapshot};
pub use store::{CacheStore, FileStore, MemoryStore};
