// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Admission control for suggestions.
//!
//! Three suggestions about Jeff Bezos are worse than one about Bezos, one about
//! physics and one about Antarctica. Every candidate, whether it came from a
//! trending match, a template or the fallback list, goes through
//! `AdmissionGuard::try_admit` and nowhere else.
//!
//! A candidate is rejected when:
//! 1. its canonical key is empty,
//! 2. an admitted suggestion already has the same key,
//! 3. the key matches something the user searched or explored verbatim, or
//! 4. its tokens significantly overlap any admitted suggestion's tokens.
//!
//! **Invariant**: admitted suggestions are pairwise distinct by key and pairwise
//! free of significant overlap.
//!
//! **Verified by**:
//! - `no_near_duplicate_pairs` (tests/property.rs)
//! - `contracts::check_suggestions` (debug builds, every run)

use crate::config::OverlapPolicy;
use crate::tokenize::{normalize_key, tokenize};
use crate::types::Suggestion;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Do two token sets describe the same story?
///
/// Overlap is significant when the shared count reaches `min_ratio` of the larger
/// set, or reaches `min_shared` outright.
pub fn has_significant_overlap(
    a: &BTreeSet<String>,
    b: &BTreeSet<String>,
    policy: OverlapPolicy,
) -> bool {
    let larger = a.len().max(b.len());
    if larger == 0 {
        return false;
    }
    let shared = a.intersection(b).count();
    if shared == 0 {
        return false;
    }
    shared as f64 / larger as f64 >= policy.min_ratio || shared >= policy.min_shared
}

/// Why a candidate was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    EmptyKey,
    AlreadyUsed,
    InHistory,
    Overlap,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Rejection::EmptyKey => "no meaningful tokens",
            Rejection::AlreadyUsed => "duplicate of an admitted suggestion",
            Rejection::InHistory => "already in search history",
            Rejection::Overlap => "overlaps an admitted suggestion",
        };
        f.write_str(text)
    }
}

/// A suggestion together with the token set it was admitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Admitted {
    pub suggestion: Suggestion,
    pub tokens: BTreeSet<String>,
}

/// Gatekeeper holding everything admitted so far.
#[derive(Debug)]
pub struct AdmissionGuard {
    policy: OverlapPolicy,
    history: HashSet<String>,
    used: HashSet<String>,
    admitted: Vec<Admitted>,
}

impl AdmissionGuard {
    /// `history` holds canonical keys of everything the user searched or explored.
    pub fn new(history: HashSet<String>, policy: OverlapPolicy) -> Self {
        Self {
            policy,
            history,
            used: HashSet::new(),
            admitted: Vec::new(),
        }
    }

    pub fn history(&self) -> &HashSet<String> {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.admitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.admitted.is_empty()
    }

    /// Everything admitted so far, in admission order.
    pub fn admitted(&self) -> &[Admitted] {
        &self.admitted
    }

    /// Try to admit a suggestion.
    ///
    /// `tokens` is the set to register for future overlap checks. Pass the
    /// interest or trending tokens when known; `None` re-tokenizes the query.
    pub fn try_admit(
        &mut self,
        suggestion: Suggestion,
        tokens: Option<BTreeSet<String>>,
    ) -> Result<(), Rejection> {
        let key = normalize_key(&suggestion.query);
        if key.is_empty() {
            return Err(Rejection::EmptyKey);
        }
        if self.used.contains(&key) {
            return Err(Rejection::AlreadyUsed);
        }
        if self.history.contains(&key) {
            return Err(Rejection::InHistory);
        }

        let tokens =
            tokens.unwrap_or_else(|| tokenize(&suggestion.query).into_iter().collect());
        if self
            .admitted
            .iter()
            .any(|prior| has_significant_overlap(&tokens, &prior.tokens, self.policy))
        {
            return Err(Rejection::Overlap);
        }

        self.used.insert(key);
        self.admitted.push(Admitted { suggestion, tokens });
        Ok(())
    }

    /// Admitted entries in admission order, truncated to `limit`.
    pub fn into_admitted(mut self, limit: usize) -> Vec<Admitted> {
        self.admitted.truncate(limit);
        self.admitted
    }
}
