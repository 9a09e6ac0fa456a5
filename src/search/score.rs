use crate::search::types::{MAX_QUERY_TOKENS, MatchField};
use crate::types::Tool;

pub(crate) const NAME_WEIGHT: u32 = 10;
pub(crate) const DESCRIPTION_WEIGHT: u32 = 5;
pub(crate) const TAG_WEIGHT: u32 = 3;
pub(crate) const CATEGORY_WEIGHT: u32 = 2;
pub(crate) const FUZZY_BONUS: u32 = 2;
pub(crate) const FEATURED_BONUS: u32 = 1;

/// Splits a query into lowercase whitespace-separated tokens.
#[must_use]
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).take(MAX_QUERY_TOKENS).collect()
}

/// Scores one tool against the token list.
///
/// Every token is matched against every weighted field by case-insensitive
/// substring containment; a token that is a subsequence of the name earns the
/// fuzzy bonus on top. Featured items get a flat bonus once, and only when
/// something matched. Returns the accumulated weight and the distinct fields
/// that contributed, in first-seen order.
#[must_use]
pub fn score_tool(tool: &Tool, tokens: &[String]) -> (u32, Vec<MatchField>) {
    fn record(matches: &mut Vec<MatchField>, field: MatchField) {
        if !matches.contains(&field) {
            matches.push(field);
        }
    }

    let mut score = 0u32;
    let mut matches: Vec<MatchField> = Vec::new();
    let name = tool.name.to_lowercase();
    let description = tool.description.to_lowercase();
    let category = tool.categories.as_ref().map(|c| c.name.to_lowercase());

    for token in tokens {
        if name.contains(token.as_str()) {
            score += NAME_WEIGHT;
            record(&mut matches, MatchField::Name);
        }
        if !description.is_empty() && description.contains(token.as_str()) {
            score += DESCRIPTION_WEIGHT;
            record(&mut matches, MatchField::Description);
        }
        if tool.tags.iter().any(|t| t.to_lowercase().contains(token.as_str())) {
            score += TAG_WEIGHT;
            record(&mut matches, MatchField::Tags);
        }
        if let Some(cat) = &category {
            if cat.contains(token.as_str()) {
                score += CATEGORY_WEIGHT;
                record(&mut matches, MatchField::Category);
            }
        }
        if is_subsequence(token, &name) {
            score += FUZZY_BONUS;
            record(&mut matches, MatchField::Name);
        }
    }

    if score > 0 && tool.is_featured {
        score += FEATURED_BONUS;
    }
    (score, matches)
}

/// Greedy subsequence check: every character of `pattern` appears in `text`
/// in order, not necessarily adjacent. Equal lengths require an exact match;
/// a pattern longer than the text never matches.
#[must_use]
pub fn is_subsequence(pattern: &str, text: &str) -> bool {
    let plen = pattern.chars().count();
    let tlen = text.chars().count();
    if plen > tlen {
        return false;
    }
    if plen == tlen {
        return pattern == text;
    }
    let mut rest = text.chars();
    pattern.chars().all(|p| rest.by_ref().any(|t| t == p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryRef;

    #[test]
    fn tokenize_lowercases_and_drops_empties() {
        assert_eq!(tokenize("  VS   Code "), vec!["vs", "code"]);
        assert!(tokenize("   ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn subsequence_basic() {
        assert!(is_subsequence("vsc", "visual studio code"));
        assert!(is_subsequence("", "anything"));
        assert!(!is_subsequence("codex", "code"));
        // equal length requires exact equality
        assert!(is_subsequence("code", "code"));
        assert!(!is_subsequence("ceod", "code"));
    }

    #[test]
    fn field_weights_accumulate() {
        let tool = Tool {
            name: "Visual Studio Code".into(),
            description: "Code editor".into(),
            tags: vec!["editor".into(), "free".into()],
            categories: Some(CategoryRef { name: "Development".into() }),
            ..Default::default()
        };
        let tokens = tokenize("code");
        let (score, matches) = score_tool(&tool, &tokens);
        // name 10 + description 5 + fuzzy 2
        assert_eq!(score, 17);
        assert_eq!(matches, vec![MatchField::Name, MatchField::Description]);
    }

    #[test]
    fn featured_bonus_only_with_a_match() {
        let featured = Tool { name: "Figma".into(), is_featured: true, ..Default::default() };
        let tokens = tokenize("unrelated");
        let (score, matches) = score_tool(&featured, &tokens);
        assert_eq!(score, 0);
        assert!(matches.is_empty());

        let (score, _) = score_tool(&featured, &tokenize("fig"));
        // name 10 + fuzzy 2 + featured 1
        assert_eq!(score, 13);
    }

    #[test]
    fn absent_fields_never_match() {
        let bare = Tool { name: "Rust".into(), ..Default::default() };
        let (score, matches) = score_tool(&bare, &tokenize("rust"));
        assert_eq!(score, NAME_WEIGHT + FUZZY_BONUS);
        assert_eq!(matches, vec![MatchField::Name]);
    }
}
