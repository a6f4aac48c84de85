//! Repeated subjects must not crowd out everything else.

use super::common::{
    assert_pairwise_distinct, fixed_clock, mentions, repeated_subject_history,
    repeated_subject_trending, NO_TOPICS,
};
use newsglide::{build_suggestions_at, SuggestionBuilder, SuggestionSource};

#[test]
fn repeated_subject_appears_at_most_once() {
    let suggestions = build_suggestions_at(
        &repeated_subject_history(),
        NO_TOPICS,
        &repeated_subject_trending(),
        3,
        &fixed_clock(),
    );

    assert_eq!(suggestions.len(), 3);
    assert!(mentions(&suggestions, "bezos") <= 1, "{:#?}", suggestions);
    assert!(mentions(&suggestions, "physics") >= 1, "{:#?}", suggestions);
    assert!(
        mentions(&suggestions, "harry") + mentions(&suggestions, "antarctica") >= 1,
        "{:#?}",
        suggestions
    );
}

#[test]
fn repeated_subject_exact_output() {
    let suggestions = build_suggestions_at(
        &repeated_subject_history(),
        NO_TOPICS,
        &repeated_subject_trending(),
        3,
        &fixed_clock(),
    );

    let queries: Vec<&str> = suggestions.iter().map(|s| s.query.as_str()).collect();
    assert_eq!(
        queries,
        vec![
            "Jeff Bezos unveils Blue Origin lunar lander plans",
            "Physics breakthrough stuns Nobel committee",
            "Harry Potter Lore Deep Dive deal tracker: who is moving in October 2026",
        ]
    );
    assert_eq!(
        suggestions[0].reason,
        "Linked to your \"Jeff Bezos Innovations\" searches"
    );
    assert_eq!(
        suggestions[2].reason,
        "Fresh angle pulled from your \"Harry Potter Lore Deep Dive\" searches"
    );
    assert!(suggestions
        .iter()
        .all(|s| s.source == SuggestionSource::Search));
}

#[test]
fn admitted_token_sets_never_overlap() {
    let builder = SuggestionBuilder::new().with_clock(fixed_clock());
    let admitted = builder.build_admitted(
        &repeated_subject_history(),
        NO_TOPICS,
        &repeated_subject_trending(),
        5,
    );
    assert_eq!(admitted.len(), 5);
    assert_pairwise_distinct(&admitted);
}

#[test]
fn larger_limit_reaches_remaining_subjects() {
    let suggestions = build_suggestions_at(
        &repeated_subject_history(),
        NO_TOPICS,
        &repeated_subject_trending(),
        5,
        &fixed_clock(),
    );
    assert!(mentions(&suggestions, "bezos") <= 1);
    assert!(mentions(&suggestions, "antarctica") >= 1);
}

#[test]
fn explored_topics_carry_explore_reasons() {
    let suggestions = build_suggestions_at(
        NO_TOPICS,
        &["Deep sea mining", "Mars rovers"],
        &["Mars rovers find ancient lake bed"],
        2,
        &fixed_clock(),
    );

    assert_eq!(suggestions.len(), 2);
    assert!(suggestions
        .iter()
        .all(|s| s.source == SuggestionSource::Explore));
    assert!(suggestions[0].reason.starts_with("Fresh angle based on \"Deep SEA Mining\""));
    assert_eq!(suggestions[1].query, "Mars rovers find ancient lake bed");
    assert_eq!(suggestions[1].reason, "Because you explored \"Mars Rovers\"");
}
