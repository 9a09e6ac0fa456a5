use toolnav::search::{MatchField, SearchEngine, SearchFilters, SortKey, SortOrder};
use toolnav::types::{CategoryRef, Tool};

fn sample_tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "Visual Studio Code".to_string(),
            description: "Free source-code editor".to_string(),
            tags: vec!["editor".to_string(), "free".to_string()],
            category_id: Some("dev".to_string()),
            categories: Some(CategoryRef { name: "Development".to_string() }),
            is_featured: true,
            url: Some("https://code.visualstudio.com".to_string()),
            click_count: 10,
            created_at: Some("2024-01-01T00:00:00Z".to_string()),
        },
        Tool {
            name: "Figma".to_string(),
            description: "Collaborative interface design".to_string(),
            tags: vec!["design".to_string()],
            category_id: Some("design".to_string()),
            categories: Some(CategoryRef { name: "Design".to_string() }),
            is_featured: false,
            url: None,
            click_count: 50,
            created_at: None,
        },
    ]
}

fn names<'a>(results: &'a [toolnav::search::SearchResult<'a>]) -> Vec<&'a str> {
    results.iter().map(|r| r.item.name.as_str()).collect()
}

#[test]
fn multi_token_query_keeps_only_scoring_items() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    engine.search("vs code");
    let results = engine.results(&tools);
    assert_eq!(names(&results), vec!["Visual Studio Code"]);
    assert!(results[0].score > 0);
    assert!(results[0].matches.contains(&MatchField::Name));
}

#[test]
fn empty_query_passes_everything_through_unscored() {
    let tools = sample_tools();
    let engine = SearchEngine::new();
    let results = engine.results(&tools);
    assert_eq!(results.len(), 2);
    for r in &results {
        assert_eq!(r.score, 1);
        assert!(r.matches.is_empty());
    }
}

#[test]
fn featured_filter_applies_on_the_empty_query_path() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    engine.filters_mut().featured_only = true;
    assert_eq!(names(&engine.results(&tools)), vec!["Visual Studio Code"]);
}

#[test]
fn tag_filter_is_or_matched_by_substring() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    engine.filters_mut().tags = vec!["design".to_string()];
    assert_eq!(names(&engine.results(&tools)), vec!["Figma"]);

    // substring match, case-insensitive
    engine.filters_mut().tags = vec!["ESIG".to_string()];
    assert_eq!(names(&engine.results(&tools)), vec!["Figma"]);
}

#[test]
fn category_filter_matches_category_id_exactly() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    engine.filters_mut().category = "dev".to_string();
    assert_eq!(names(&engine.results(&tools)), vec!["Visual Studio Code"]);

    engine.filters_mut().category = "de".to_string();
    assert!(engine.results(&tools).is_empty());
}

#[test]
fn url_filter_excludes_blank_urls() {
    let mut tools = sample_tools();
    tools[1].url = Some("   ".to_string());
    let mut engine = SearchEngine::new();
    engine.filters_mut().with_url_only = true;
    assert_eq!(names(&engine.results(&tools)), vec!["Visual Studio Code"]);
}

#[test]
fn clicks_sort_descending_orders_by_click_count() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    engine.filters_mut().sort_by = SortKey::Clicks;
    engine.filters_mut().sort_order = SortOrder::Desc;
    assert_eq!(names(&engine.results(&tools)), vec!["Figma", "Visual Studio Code"]);
}

#[test]
fn name_sort_orders_case_insensitively_both_ways() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    assert_eq!(names(&engine.results(&tools)), vec!["Figma", "Visual Studio Code"]);

    engine.filters_mut().sort_order = SortOrder::Desc;
    assert_eq!(names(&engine.results(&tools)), vec!["Visual Studio Code", "Figma"]);
}

#[test]
fn created_at_sort_treats_missing_dates_as_epoch() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    engine.filters_mut().sort_by = SortKey::CreatedAt;
    // Figma has no created_at and ranks as epoch 0
    assert_eq!(names(&engine.results(&tools)), vec!["Figma", "Visual Studio Code"]);

    engine.filters_mut().sort_order = SortOrder::Desc;
    assert_eq!(names(&engine.results(&tools)), vec!["Visual Studio Code", "Figma"]);
}

#[test]
fn relevance_sort_ranks_name_matches_above_description_matches() {
    let tools = vec![
        Tool {
            name: "Editor X".to_string(),
            description: "Website builder".to_string(),
            ..Default::default()
        },
        Tool {
            name: "Figma".to_string(),
            description: "Design editor".to_string(),
            ..Default::default()
        },
    ];
    let mut engine = SearchEngine::new();
    engine.filters_mut().sort_by = SortKey::Relevance;
    engine.search("editor");
    assert_eq!(names(&engine.results(&tools)), vec!["Editor X", "Figma"]);
}

#[test]
fn history_deduplicates_and_moves_repeats_to_front() {
    let mut engine = SearchEngine::new();
    engine.search("code");
    engine.search("design");
    engine.search("code");

    assert_eq!(engine.history(), &["code".to_string(), "design".to_string()]);
}

#[test]
fn history_is_capped_at_fifty() {
    let mut engine = SearchEngine::new();
    for i in 0..55 {
        engine.search(&format!("query-{i}"));
    }
    assert_eq!(engine.history().len(), 50);
    assert_eq!(engine.history()[0], "query-54");
}

#[test]
fn blank_queries_never_enter_history() {
    let mut engine = SearchEngine::new();
    engine.search("   ");
    engine.search("");
    assert!(engine.history().is_empty());
}

#[test]
fn clear_search_resets_query_but_keeps_history() {
    let mut engine = SearchEngine::new();
    engine.search("code");
    engine.clear_search();
    assert_eq!(engine.query(), "");
    assert_eq!(engine.history(), &["code".to_string()]);
}

#[test]
fn reset_filters_restores_defaults() {
    let mut engine = SearchEngine::new();
    engine.filters_mut().category = "dev".to_string();
    engine.filters_mut().featured_only = true;
    engine.filters_mut().sort_by = SortKey::Clicks;
    engine.reset_filters();
    assert_eq!(engine.filters(), &SearchFilters::default());
}

#[test]
fn suggestions_include_matching_names_and_tags() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    engine.search("fig");
    assert_eq!(engine.suggestions(&tools), vec!["Figma".to_string()]);

    engine.search("e");
    assert!(engine.suggestions(&tools).is_empty(), "single character yields nothing");

    engine.search("de");
    let suggestions = engine.suggestions(&tools);
    assert!(suggestions.contains(&"design".to_string()));
    assert!(suggestions.len() <= 5);
}

#[test]
fn popular_searches_follow_history_order() {
    let mut engine = SearchEngine::new();
    engine.search("code");
    engine.search("design");
    engine.search("icons");
    let popular = engine.popular_searches();
    assert_eq!(popular.len(), 3);
    assert!(popular.contains(&"code".to_string()));
    assert!(popular.contains(&"design".to_string()));
    assert!(popular.contains(&"icons".to_string()));
}

#[test]
fn pipeline_is_idempotent_for_unchanged_inputs() {
    let tools = sample_tools();
    let mut engine = SearchEngine::new();
    engine.search("code");
    engine.filters_mut().sort_by = SortKey::Relevance;

    let first: Vec<(String, u32)> =
        engine.results(&tools).iter().map(|r| (r.item.name.clone(), r.score)).collect();
    let second: Vec<(String, u32)> =
        engine.results(&tools).iter().map(|r| (r.item.name.clone(), r.score)).collect();
    assert_eq!(first, second);
}
