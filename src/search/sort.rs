use crate::search::types::{SearchResult, SortKey, SortOrder};
use std::cmp::Ordering;

/// Comparator for the ranked result list.
///
/// Each key computes its natural ordering first (ascending for field keys,
/// score-descending for `Relevance`), then `SortOrder::Desc` flips the sign.
#[must_use]
pub fn compare_results(
    a: &SearchResult<'_>,
    b: &SearchResult<'_>,
    key: SortKey,
    order: SortOrder,
) -> Ordering {
    let ord = match key {
        SortKey::Name => a.item.name.to_lowercase().cmp(&b.item.name.to_lowercase()),
        SortKey::Clicks => a.item.click_count.cmp(&b.item.click_count),
        SortKey::CreatedAt => a.item.created_at_ms().cmp(&b.item.created_at_ms()),
        SortKey::Relevance => b.score.cmp(&a.score),
    };
    if matches!(order, SortOrder::Desc) { ord.reverse() } else { ord }
}
