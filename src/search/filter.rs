use crate::search::types::SearchFilters;
use crate::types::Tool;

/// Structured-filter predicate applied to scored candidates. Absent fields
/// fail the constraint rather than erroring.
#[must_use]
pub fn matches_filters(tool: &Tool, filters: &SearchFilters) -> bool {
    if !filters.category.is_empty()
        && tool.category_id.as_deref() != Some(filters.category.as_str())
    {
        return false;
    }

    if !filters.tags.is_empty() {
        let wanted: Vec<String> = filters.tags.iter().map(|t| t.to_lowercase()).collect();
        let any_hit = tool.tags.iter().any(|own| {
            let own = own.to_lowercase();
            wanted.iter().any(|w| own.contains(w.as_str()))
        });
        if !any_hit {
            return false;
        }
    }

    if filters.featured_only && !tool.is_featured {
        return false;
    }

    if filters.with_url_only && tool.url.as_deref().is_none_or(|u| u.trim().is_empty()) {
        return false;
    }

    true
}
