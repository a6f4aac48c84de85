//! Shared test utilities and fixtures.

#![allow(dead_code)]

use newsglide::{has_significant_overlap, normalize_key, Admitted, OverlapPolicy, Suggestion};
use std::collections::HashSet;

// Re-export canonical test utilities from newsglide::testing
pub use newsglide::testing::{
    fixed_clock, fixture_period, repeated_subject_history, repeated_subject_trending, NO_TOPICS,
};

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Count suggestions whose query mentions `word` (case-insensitive).
pub fn mentions(suggestions: &[Suggestion], word: &str) -> usize {
    let word = word.to_lowercase();
    suggestions
        .iter()
        .filter(|s| s.query.to_lowercase().contains(&word))
        .count()
}

/// Assert no suggestion repeats an input phrase by canonical key.
pub fn assert_no_history_repeats(suggestions: &[Suggestion], history: &[&str]) {
    let keys: HashSet<String> = history
        .iter()
        .map(|h| normalize_key(h))
        .filter(|k| !k.is_empty())
        .collect();
    for suggestion in suggestions {
        let key = normalize_key(&suggestion.query);
        assert!(
            !keys.contains(&key),
            "Suggestion '{}' repeats history key '{}'",
            suggestion.query,
            key
        );
    }
}

/// Assert no two admitted token sets significantly overlap.
pub fn assert_pairwise_distinct(admitted: &[Admitted]) {
    let policy = OverlapPolicy::default();
    for i in 0..admitted.len() {
        for j in (i + 1)..admitted.len() {
            assert!(
                !has_significant_overlap(&admitted[i].tokens, &admitted[j].tokens, policy),
                "Suggestions {} ('{}') and {} ('{}') overlap",
                i,
                admitted[i].suggestion.query,
                j,
                admitted[j].suggestion.query
            );
        }
    }
}
