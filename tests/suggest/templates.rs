//! Synthesized headlines read like headlines, not filler.

use super::common::{fixed_clock, NO_TOPICS};
use newsglide::{build_suggestions_at, SuggestionSource};

#[test]
fn generated_headlines_avoid_filler_words() {
    let suggestions = build_suggestions_at(
        &["Jeff Bezos", "Quantum physics breakthroughs", "Antarctica research stations"],
        NO_TOPICS,
        NO_TOPICS,
        3,
        &fixed_clock(),
    );

    assert_eq!(suggestions.len(), 3);
    for suggestion in &suggestions {
        let lower = suggestion.query.to_lowercase();
        assert!(!lower.contains("latest"), "{}", suggestion.query);
        assert!(!lower.contains("headline"), "{}", suggestion.query);
        assert_eq!(suggestion.source, SuggestionSource::Search);
    }
}

#[test]
fn generated_headlines_are_seeded_by_tokens_and_position() {
    let suggestions = build_suggestions_at(
        &["Jeff Bezos", "Quantum physics breakthroughs", "Antarctica research stations"],
        NO_TOPICS,
        NO_TOPICS,
        3,
        &fixed_clock(),
    );

    let queries: Vec<&str> = suggestions.iter().map(|s| s.query.as_str()).collect();
    assert_eq!(
        queries,
        vec![
            "Jeff Bezos' October 2026 strategy reset",
            "Quantum Physics Breakthroughs deal tracker: who is moving in October 2026",
            "Antarctica Research Stations' October 2026 strategy reset",
        ]
    );
}

#[test]
fn templates_mention_the_subject() {
    let suggestions =
        build_suggestions_at(&["Ocean cleanup"], NO_TOPICS, NO_TOPICS, 1, &fixed_clock());
    assert!(suggestions[0].query.contains("Ocean Cleanup"));
}
