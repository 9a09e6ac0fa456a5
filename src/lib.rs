pub mod cache;
pub mod errors;
pub mod logger;
pub mod search;
pub mod types;

pub use cache::{Cache, CacheConfig, CacheStats, CacheStore, FileStore, MemoryStore, load_with_cache};
pub use search::{SearchEngine, SearchFilters, SearchResult, SortKey, SortOrder};
pub use types::{CategoryRef, Tool};

/// Initializes the logging system.
///
/// This function should be called once before any other operations.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    Ok(())
}
