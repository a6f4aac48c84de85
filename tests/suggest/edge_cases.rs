//! Inputs at the edges of the domain.

use super::common::{assert_no_history_repeats, fixed_clock, NO_TOPICS};
use newsglide::{build_suggestions_at, SuggestionSource};

#[test]
fn zero_limit_returns_nothing() {
    let suggestions = build_suggestions_at(&["Volcanoes"], NO_TOPICS, &["Volcano erupts"], 0, &fixed_clock());
    assert!(suggestions.is_empty());
}

#[test]
fn trending_copy_of_history_is_never_suggested() {
    let history = ["Ocean cleanup"];
    let trending = ["Latest: Ocean Cleanup!", "Chess prodigy wins title"];
    let suggestions = build_suggestions_at(&history, NO_TOPICS, &trending, 3, &fixed_clock());

    assert_no_history_repeats(&suggestions, &history);
    assert!(suggestions
        .iter()
        .all(|s| s.query != "Latest: Ocean Cleanup!"));
}

#[test]
fn trending_topics_are_trimmed() {
    let suggestions =
        build_suggestions_at(NO_TOPICS, NO_TOPICS, &["  Chess prodigy wins title  "], 1, &fixed_clock());
    assert_eq!(suggestions[0].query, "Chess prodigy wins title");
    assert_eq!(suggestions[0].source, SuggestionSource::Trending);
}

#[test]
fn near_duplicate_trending_headlines_collapse() {
    let trending = [
        "SpaceX Starship launch succeeds",
        "Starship launch succeeds for SpaceX",
        "Chess prodigy wins title",
    ];
    let suggestions = build_suggestions_at(NO_TOPICS, NO_TOPICS, &trending, 3, &fixed_clock());
    let queries: Vec<&str> = suggestions.iter().map(|s| s.query.as_str()).collect();
    assert_eq!(queries[0], "SpaceX Starship launch succeeds");
    assert_eq!(queries[1], "Chess prodigy wins title");
    assert_eq!(suggestions[2].source, SuggestionSource::Fallback);
}

#[test]
fn search_and_explore_of_same_topic_merge() {
    let suggestions = build_suggestions_at(
        &["mars rovers"],
        &["Mars Rovers", "Latest Mars rovers news"],
        NO_TOPICS,
        1,
        &fixed_clock(),
    );
    assert_eq!(suggestions[0].source, SuggestionSource::Search);
    assert!(suggestions[0].reason.contains("\"Mars Rovers\" searches"));
}
