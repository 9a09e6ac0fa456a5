// Submodules for separation of concerns
mod engine;
mod filter;
mod score;
mod sort;
mod types;

// Public API re-exports
pub use engine::SearchEngine;
pub use filter::matches_filters;
pub use score::{is_subsequence, score_tool, tokenize};
pub use sort::compare_results;
pub use types::{MatchField, SearchFilters, SearchResult, SortKey, SortOrder};
