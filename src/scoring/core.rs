// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! How well a trending headline fits an interest.
//!
//! Four signals, all additive:
//!
//! | Signal                                        | Points        |
//! |-----------------------------------------------|---------------|
//! | Headline key contains the interest key        | 6             |
//! | Raw headline contains the interest label      | 5             |
//! | Each interest token in the headline token set | 3             |
//! | No shared tokens, but a token appears raw     | 1             |
//!
//! A score of zero means no relationship at all and is never selected. The weak
//! signal lets "Mars mission" reach "Marsquake data..." where tokenization keeps
//! "marsquake" whole. The substring signals are raw substring checks, so short
//! interests like "AI" also light up inside longer words.

use crate::types::{CanonicalInterest, TrendingEntry};

/// Headline key contains the full interest key.
pub const SUBSTRING_SCORE: u32 = 6;

/// Raw headline text contains the display label.
pub const LABEL_SCORE: u32 = 5;

/// Per shared token.
pub const TOKEN_SCORE: u32 = 3;

/// Some interest token appears inside the raw text without being a whole token.
pub const WEAK_SCORE: u32 = 1;

/// Score a trending entry against an interest.
pub fn match_score(interest: &CanonicalInterest, entry: &TrendingEntry) -> u32 {
    let mut score = 0;

    if !interest.normalized.is_empty() && entry.normalized.contains(&interest.normalized) {
        score += SUBSTRING_SCORE;
    }

    let topic_lower = entry.topic.to_lowercase();
    let label_lower = interest.label.to_lowercase();
    if !label_lower.is_empty() && topic_lower.contains(&label_lower) {
        score += LABEL_SCORE;
    }

    let shared = interest
        .tokens
        .iter()
        .filter(|token| entry.tokens.contains(*token))
        .count() as u32;
    score += TOKEN_SCORE * shared;

    if shared == 0
        && interest
            .tokens
            .iter()
            .any(|token| topic_lower.contains(token.as_str()))
    {
        score += WEAK_SCORE;
    }

    score
}
