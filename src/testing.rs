//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::clock::{FixedClock, MonthYear};
use crate::tokenize::canonicalize;
use crate::trending::build_trending_entries;
use crate::types::{CanonicalInterest, SuggestionSource, TrendingEntry};

/// Empty topic list usable for any of the three inputs.
pub const NO_TOPICS: &[&str] = &[];

/// October 2026, the month fixtures are written against.
pub fn fixture_period() -> MonthYear {
    MonthYear {
        month: 10,
        year: 2026,
    }
}

/// A clock frozen at [`fixture_period`].
pub fn fixed_clock() -> FixedClock {
    FixedClock(fixture_period())
}

/// Build an interest directly from a phrase.
///
/// Panics if the phrase has no meaningful tokens.
pub fn make_interest(phrase: &str, weight: u32, source: SuggestionSource) -> CanonicalInterest {
    let canonical = canonicalize(phrase)
        .unwrap_or_else(|| panic!("'{}' has no meaningful tokens", phrase));
    CanonicalInterest {
        label: canonical.label,
        normalized: canonical.normalized,
        tokens: canonical.tokens,
        weight,
        source,
        example: phrase.to_string(),
    }
}

/// Build a single trending entry at `index`.
///
/// Panics if the topic has no meaningful tokens.
pub fn make_entry(index: usize, topic: &str) -> TrendingEntry {
    let mut entries = build_trending_entries(&[topic]);
    let mut entry = entries
        .pop()
        .unwrap_or_else(|| panic!("'{}' has no meaningful tokens", topic));
    entry.index = index;
    entry
}

/// Search history that repeats one subject next to several distinct ones.
pub fn repeated_subject_history() -> Vec<&'static str> {
    vec![
        "Jeff Bezos innovations",
        "Jeff Bezos leadership",
        "Physics Nobel candidates",
        "Harry Potter lore deep dive",
        "Antarctica climate missions",
    ]
}

/// Trending headlines that match [`repeated_subject_history`].
pub fn repeated_subject_trending() -> Vec<&'static str> {
    vec![
        "Jeff Bezos unveils Blue Origin lunar lander plans",
        "Jeff Bezos steps up Amazon leadership changes",
        "Physics breakthrough stuns Nobel committee",
        "Antarctica ice shelf collapse alarms climate scientists",
    ]
}
