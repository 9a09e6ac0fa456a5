use crate::search::filter::matches_filters;
use crate::search::score::{score_tool, tokenize};
use crate::search::sort::compare_results;
use crate::search::types::{
    HISTORY_CAP, POPULAR_LIMIT, SUGGESTION_LIMIT, SearchFilters, SearchResult,
};
use crate::types::Tool;
use std::collections::HashMap;

/// Query/filter/history state plus the synchronous ranking pipeline.
///
/// `results` is a pure function of (query, filters, items); hosts re-invoke
/// it whenever any input changes. The engine does no I/O and raises no
/// errors: an empty result set is a valid, silent outcome.
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    query: String,
    filters: SearchFilters,
    history: Vec<String>,
}

impl SearchEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    pub fn filters_mut(&mut self) -> &mut SearchFilters {
        &mut self.filters
    }

    /// Most-recent-first, deduplicated, capped at 50 entries.
    #[must_use]
    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Sets the active query and records it in the history.
    ///
    /// Blank queries are not recorded. A re-searched term is moved to the
    /// front rather than duplicated.
    pub fn search(&mut self, query: &str) {
        self.query = query.to_owned();
        if query.trim().is_empty() {
            return;
        }
        self.history.retain(|h| h != query);
        self.history.insert(0, query.to_owned());
        self.history.truncate(HISTORY_CAP);
    }

    /// Resets the query to empty; history is untouched.
    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    /// Restores every filter field to its default.
    pub fn reset_filters(&mut self) {
        self.filters = SearchFilters::default();
    }

    /// Scores, filters, and sorts `items` against the current query and
    /// filters. An empty or whitespace-only query passes every item through
    /// unscored (score 1, no matches); filters still apply.
    #[must_use]
    pub fn results<'a>(&self, items: &'a [Tool]) -> Vec<SearchResult<'a>> {
        let tokens = tokenize(&self.query);
        let mut out: Vec<SearchResult<'a>> = if tokens.is_empty() {
            items
                .iter()
                .map(|item| SearchResult { item, score: 1, matches: Vec::new() })
                .collect()
        } else {
            items
                .iter()
                .filter_map(|item| {
                    let (score, matches) = score_tool(item, &tokens);
                    (score > 0).then_some(SearchResult { item, score, matches })
                })
                .collect()
        };
        out.retain(|r| matches_filters(r.item, &self.filters));
        out.sort_by(|a, b| compare_results(a, b, self.filters.sort_by, self.filters.sort_order));
        out
    }

    /// Name and tag completions for the current query, deduplicated, in scan
    /// order. Empty below two characters.
    #[must_use]
    pub fn suggestions(&self, items: &[Tool]) -> Vec<String> {
        let query = self.query.trim().to_lowercase();
        if query.chars().count() < 2 {
            return Vec::new();
        }
        let mut out: Vec<String> = Vec::new();
        for item in items {
            if item.name.to_lowercase().contains(&query) && !out.contains(&item.name) {
                out.push(item.name.clone());
            }
            for tag in &item.tags {
                if tag.to_lowercase().contains(&query) && !out.contains(tag) {
                    out.push(tag.clone());
                }
            }
            if out.len() >= SUGGESTION_LIMIT {
                break;
            }
        }
        out.truncate(SUGGESTION_LIMIT);
        out
    }

    /// Most-searched queries from the retained history, count-descending,
    /// stable on ties, top 10.
    #[must_use]
    pub fn popular_searches(&self) -> Vec<String> {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (seen, q) in self.history.iter().enumerate() {
            counts.entry(q.as_str()).or_insert((0, seen)).0 += 1;
        }
        let mut tallied: Vec<(&str, usize, usize)> =
            counts.into_iter().map(|(q, (n, seen))| (q, n, seen)).collect();
        tallied.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
        tallied.into_iter().take(POPULAR_LIMIT).map(|(q, _, _)| q.to_owned()).collect()
    }
}
