//! Degraded inputs fall through to curated briefings.

use super::common::{fixed_clock, fixture_period, NO_TOPICS};
use newsglide::templates::fallback_headlines;
use newsglide::{build_suggestions, build_suggestions_at, SuggestionSource};

#[test]
fn empty_inputs_yield_three_curated_briefings() {
    let suggestions = build_suggestions(NO_TOPICS, NO_TOPICS, NO_TOPICS, 3);
    assert_eq!(suggestions.len(), 3);
    assert!(suggestions
        .iter()
        .all(|s| s.source == SuggestionSource::Fallback));
    assert!(suggestions
        .iter()
        .all(|s| s.reason == "Curated briefing picked for you"));
}

#[test]
fn curated_briefings_come_in_fixed_order() {
    let suggestions = build_suggestions_at(NO_TOPICS, NO_TOPICS, NO_TOPICS, 3, &fixed_clock());
    let expected = fallback_headlines(fixture_period());
    let queries: Vec<String> = suggestions.into_iter().map(|s| s.query).collect();
    assert_eq!(queries, expected[..3].to_vec());
    assert_eq!(queries[0], "Global developments shaping October 2026");
}

#[test]
fn only_four_briefings_exist() {
    let suggestions = build_suggestions_at(NO_TOPICS, NO_TOPICS, NO_TOPICS, 10, &fixed_clock());
    assert_eq!(suggestions.len(), 4);
}

#[test]
fn junk_inputs_degrade_like_empty_ones() {
    let junk = ["", "   ", "!!!", "Breaking news today", "2025"];
    let suggestions = build_suggestions_at(&junk, &junk, &junk, 3, &fixed_clock());
    let baseline = build_suggestions_at(NO_TOPICS, NO_TOPICS, NO_TOPICS, 3, &fixed_clock());
    assert_eq!(suggestions, baseline);
}

#[test]
fn briefings_top_up_partial_personalization() {
    let suggestions = build_suggestions_at(&["Volcanoes"], NO_TOPICS, NO_TOPICS, 3, &fixed_clock());
    let sources: Vec<SuggestionSource> = suggestions.iter().map(|s| s.source).collect();
    assert_eq!(
        sources,
        vec![
            SuggestionSource::Search,
            SuggestionSource::Fallback,
            SuggestionSource::Fallback
        ]
    );
}
