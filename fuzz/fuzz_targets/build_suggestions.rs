// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the suggestion pipeline.
//!
//! Arbitrary search history, explored topics and trending feeds must never
//! panic the pipeline or break its output guarantees.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use newsglide::{
    has_significant_overlap, normalize_key, FixedClock, MonthYear, OverlapPolicy,
    SuggestionBuilder,
};
use std::collections::HashSet;

#[derive(Debug, Arbitrary)]
struct Session {
    search_terms: Vec<String>,
    explore_topics: Vec<String>,
    trending_topics: Vec<String>,
    limit: u8,
    month: u8,
}

fuzz_target!(|session: Session| {
    // Cap sizes to avoid timeouts
    let cap = |topics: Vec<String>| -> Vec<String> {
        topics
            .into_iter()
            .take(32)
            .map(|t| t.chars().take(200).collect())
            .collect()
    };
    let search = cap(session.search_terms);
    let explore = cap(session.explore_topics);
    let trending = cap(session.trending_topics);
    let limit = (session.limit % 16) as usize;
    let period = MonthYear {
        month: (session.month % 12) as u32 + 1,
        year: 2026,
    };

    let builder = SuggestionBuilder::new().with_clock(FixedClock(period));
    let admitted = builder.build_admitted(&search, &explore, &trending, limit);

    // INVARIANT 1: Output bounded by limit
    assert!(admitted.len() <= limit, "Got {} suggestions, limit {}", admitted.len(), limit);

    // INVARIANT 2: No suggestion repeats history by canonical key
    let history: HashSet<String> = search
        .iter()
        .chain(explore.iter())
        .map(|t| normalize_key(t))
        .filter(|k| !k.is_empty())
        .collect();
    for entry in &admitted {
        let key = normalize_key(&entry.suggestion.query);
        assert!(!key.is_empty(), "Empty key for '{}'", entry.suggestion.query);
        assert!(!history.contains(&key), "History repeat '{}'", entry.suggestion.query);
    }

    // INVARIANT 3: No significant overlap between any pair
    let policy = OverlapPolicy::default();
    for i in 0..admitted.len() {
        for j in (i + 1)..admitted.len() {
            assert!(
                !has_significant_overlap(&admitted[i].tokens, &admitted[j].tokens, policy),
                "Overlap between '{}' and '{}'",
                admitted[i].suggestion.query,
                admitted[j].suggestion.query
            );
        }
    }

    // INVARIANT 4: Deterministic for a fixed month
    let again = builder.build_admitted(&search, &explore, &trending, limit);
    assert_eq!(admitted, again);
});
