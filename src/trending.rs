// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Trending headlines: preparation and best-match lookup.

use crate::scoring::match_score;
use crate::tokenize::tokenize;
use crate::types::{CanonicalInterest, TrendingEntry};
use std::collections::HashSet;
use tracing::trace;

/// Tokenize trending topics, skipping blank or filler-only headlines.
///
/// Each entry keeps its position in `topics` so leftovers can be emitted in feed order.
pub fn build_trending_entries<S: AsRef<str>>(topics: &[S]) -> Vec<TrendingEntry> {
    topics
        .iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let topic = raw.as_ref().trim();
            if topic.is_empty() {
                return None;
            }
            let tokens = tokenize(topic);
            if tokens.is_empty() {
                return None;
            }
            Some(TrendingEntry {
                index,
                topic: topic.to_string(),
                normalized: tokens.join(" "),
                tokens: tokens.into_iter().collect(),
            })
        })
        .collect()
}

/// Find the unused entry that best fits `interest`.
///
/// Entries already claimed (`used`) or whose key is in the user's own history are
/// skipped. The strictly highest score wins, so ties go to the earlier entry.
/// Returns `None` when nothing scores above zero.
pub fn find_best_match<'a>(
    interest: &CanonicalInterest,
    entries: &'a [TrendingEntry],
    used: &HashSet<usize>,
    history: &HashSet<String>,
) -> Option<&'a TrendingEntry> {
    let mut best: Option<(&TrendingEntry, u32)> = None;

    for entry in entries {
        if used.contains(&entry.index) || history.contains(&entry.normalized) {
            continue;
        }
        let score = match_score(interest, entry);
        trace!(interest = %interest.label, topic = %entry.topic, score, "scored trending entry");
        if score == 0 {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((entry, score)),
        }
    }

    best.map(|(entry, _)| entry)
}
