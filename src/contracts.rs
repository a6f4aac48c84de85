// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for suggestion output.
//!
//! Debug-mode assertions that re-check, after the fact, what `AdmissionGuard` is
//! supposed to guarantee. They:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Catch a broken admission path the first time a test runs it
//! 3. Check the finished list, not the individual decisions
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | `check_bounded`          | never more than `limit` suggestions             |
//! | `check_unique_keys`      | no two suggestions share a canonical key        |
//! | `check_not_in_history`   | nothing the user already searched or explored   |
//! | `check_no_near_duplicates` | no pair with significant token overlap        |

use crate::config::{OverlapPolicy, OVERLAP_MIN_RATIO, OVERLAP_MIN_SHARED};
use crate::scoring::{LABEL_SCORE, SUBSTRING_SCORE, TOKEN_SCORE, WEAK_SCORE};
use crate::suggest::{has_significant_overlap, Admitted};
use crate::tokenize::normalize_key;
use std::collections::HashSet;

// ============================================================================
// COMPILE-TIME ASSERTIONS
// ============================================================================

const _: () = {
    // A full-phrase match must outrank a label-only match, and the weak signal
    // must stay below any real token overlap.
    assert!(SUBSTRING_SCORE > LABEL_SCORE);
    assert!(TOKEN_SCORE > WEAK_SCORE);
    assert!(WEAK_SCORE > 0);
    assert!(OVERLAP_MIN_SHARED >= 1);
    assert!(OVERLAP_MIN_RATIO > 0.0 && OVERLAP_MIN_RATIO <= 1.0);
};

/// Output length never exceeds the requested limit.
#[inline]
pub fn check_bounded(len: usize, limit: usize) {
    debug_assert!(
        len <= limit,
        "Contract violation: {} suggestions returned for limit {}",
        len,
        limit
    );
}

/// Every admitted suggestion has a distinct, non-empty canonical key.
#[inline]
pub fn check_unique_keys(admitted: &[Admitted]) {
    let mut seen = HashSet::new();
    for (i, entry) in admitted.iter().enumerate() {
        let key = normalize_key(&entry.suggestion.query);
        debug_assert!(
            !key.is_empty(),
            "Contract violation: suggestion[{}] '{}' has an empty key",
            i,
            entry.suggestion.query
        );
        debug_assert!(
            seen.insert(key.clone()),
            "Contract violation: suggestion[{}] repeats key '{}'",
            i,
            key
        );
    }
}

/// Nothing admitted is a verbatim repeat of the user's history.
#[inline]
pub fn check_not_in_history(admitted: &[Admitted], history: &HashSet<String>) {
    for (i, entry) in admitted.iter().enumerate() {
        let key = normalize_key(&entry.suggestion.query);
        debug_assert!(
            !history.contains(&key),
            "Contract violation: suggestion[{}] '{}' is in history",
            i,
            entry.suggestion.query
        );
    }
}

/// No two admitted token sets significantly overlap.
#[inline]
pub fn check_no_near_duplicates(admitted: &[Admitted], policy: OverlapPolicy) {
    for i in 0..admitted.len() {
        for j in (i + 1)..admitted.len() {
            debug_assert!(
                !has_significant_overlap(&admitted[i].tokens, &admitted[j].tokens, policy),
                "Contract violation: suggestions {} ('{}') and {} ('{}') overlap",
                i,
                admitted[i].suggestion.query,
                j,
                admitted[j].suggestion.query
            );
        }
    }
}

/// All of the above, for a finished run.
#[inline]
pub fn check_suggestions(
    admitted: &[Admitted],
    limit: usize,
    history: &HashSet<String>,
    policy: OverlapPolicy,
) {
    check_bounded(admitted.len(), limit);
    check_unique_keys(admitted);
    check_not_in_history(admitted, history);
    check_no_near_duplicates(admitted, policy);
}
