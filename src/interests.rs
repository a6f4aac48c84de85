// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interest aggregation: turning history into a ranked list of topics.
//!
//! Search terms and explored topics are folded into one map keyed by canonical
//! phrase. "AI regulation", "ai regulation news" and "AI Regulation!" all land on
//! the same entry and their weights add up. A search occurrence always marks the
//! entry as search-sourced, since typing a query is a stronger signal than
//! clicking a card.

use crate::config::SourceWeights;
use crate::scoring::ranking::rank_interests;
use crate::tokenize::canonicalize;
use crate::types::{CanonicalInterest, SuggestionSource};
use std::collections::HashMap;

/// Accumulates interests in first-seen order.
#[derive(Debug, Default)]
struct InterestMap {
    entries: Vec<CanonicalInterest>,
    by_key: HashMap<String, usize>,
}

impl InterestMap {
    fn add(&mut self, raw: &str, weight: u32, source: SuggestionSource) {
        let Some(canonical) = canonicalize(raw) else {
            return;
        };

        if let Some(&idx) = self.by_key.get(&canonical.key) {
            let entry = &mut self.entries[idx];
            entry.weight = entry.weight.saturating_add(weight);
            if source == SuggestionSource::Search {
                entry.source = SuggestionSource::Search;
            }
            return;
        }

        self.by_key.insert(canonical.key.clone(), self.entries.len());
        self.entries.push(CanonicalInterest {
            label: canonical.label,
            normalized: canonical.normalized,
            tokens: canonical.tokens,
            weight,
            source,
            example: raw.to_string(),
        });
    }
}

/// Merge search terms and explored topics into interests, heaviest first.
///
/// Phrases that tokenize to nothing are dropped. Ties keep first-seen order,
/// with all search terms seen before any explored topic.
pub fn aggregate_interests<S, E>(
    search_terms: &[S],
    explore_topics: &[E],
    weights: SourceWeights,
) -> Vec<CanonicalInterest>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    let mut map = InterestMap::default();
    for term in search_terms {
        map.add(term.as_ref(), weights.search, SuggestionSource::Search);
    }
    for topic in explore_topics {
        map.add(topic.as_ref(), weights.explore, SuggestionSource::Explore);
    }

    let mut interests = map.entries;
    rank_interests(&mut interests);
    interests
}
