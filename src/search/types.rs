use crate::types::Tool;
use serde::{Deserialize, Serialize};

// Safety limits to keep pathological inputs cheap
pub(crate) const MAX_QUERY_TOKENS: usize = 32;
pub(crate) const HISTORY_CAP: usize = 50;
pub(crate) const SUGGESTION_LIMIT: usize = 5;
pub(crate) const POPULAR_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Result ordering key.
///
/// `Relevance` ranks higher scores first before the order flag is applied;
/// the other keys compare ascending first. There is no rating key: tool
/// records carry no rating field, and aliasing one to click counts would
/// mislead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    Name,
    Clicks,
    CreatedAt,
    Relevance,
}

/// Structured constraints applied to scored candidates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    /// Exact `category_id` equality; empty means unconstrained.
    pub category: String,
    /// OR-matched, case-insensitive substrings against the item's own tags.
    pub tags: Vec<String>,
    pub featured_only: bool,
    /// Excludes items whose url is absent or whitespace-only.
    pub with_url_only: bool,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            category: String::new(),
            tags: Vec::new(),
            featured_only: false,
            with_url_only: false,
            sort_by: SortKey::Name,
            sort_order: SortOrder::Asc,
        }
    }
}

/// Field that contributed to a result's score, kept for highlighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Name,
    Description,
    Tags,
    Category,
}

impl MatchField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::Category => "category",
        }
    }
}

/// One ranked hit. Borrows the original record; results are recomputed on
/// every input change and never persisted.
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    pub item: &'a Tool,
    pub score: u32,
    /// Distinct contributing fields, first-seen order.
    pub matches: Vec<MatchField>,
}
