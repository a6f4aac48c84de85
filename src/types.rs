// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a suggestion run.
//!
//! `Suggestion` is the only type that leaves the pipeline. The other two are
//! working state: interests are built from the user's history, trending entries
//! from the headline feed, and both carry pre-computed tokens so the dedup guard
//! never has to re-tokenize what it already knows.
//!
//! # Invariants
//!
//! - **CanonicalInterest**: `normalized == tokens.join(" ")` and `tokens` is non-empty.
//!   An interest with no tokens would match everything and dedup against nothing.
//!
//! - **TrendingEntry**: `index` is the position in the caller's original list, not the
//!   position among valid entries. Leftover trending entries are emitted in that order.
//!
//! - **Suggestion output**: no two suggestions share a normalized query, and no pair
//!   has significant token overlap. See `contracts::check_suggestions`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Where a suggestion came from.
///
/// Serialized lowercase (`"search"`, `"explore"`, ...) to match the JSON payloads
/// the web client already consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    Search,
    Explore,
    Trending,
    Fallback,
}

impl SuggestionSource {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionSource::Search => "search",
            SuggestionSource::Explore => "explore",
            SuggestionSource::Trending => "trending",
            SuggestionSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for SuggestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single search suggestion shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub query: String,
    pub reason: String,
    pub source: SuggestionSource,
}

/// A weighted topic aggregated from search history and explored topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalInterest {
    /// Display form, e.g. "Jeff Bezos" or "AI Regulation".
    pub label: String,
    /// Dedup key: stop-word-filtered lowercase tokens joined by spaces.
    pub normalized: String,
    /// Ordered, unique tokens.
    pub tokens: Vec<String>,
    /// +search weight per search occurrence, +explore weight per explore occurrence.
    pub weight: u32,
    /// `Search` if any contributing occurrence came from search history.
    pub source: SuggestionSource,
    /// First raw phrase that produced this interest.
    pub example: String,
}

impl CanonicalInterest {
    /// Token set used for overlap checks.
    pub fn token_set(&self) -> BTreeSet<String> {
        self.tokens.iter().cloned().collect()
    }
}

/// A trending headline prepared for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrendingEntry {
    /// Position in the caller's original trending list.
    pub index: usize,
    /// The headline as supplied (trimmed).
    pub topic: String,
    pub normalized: String,
    pub tokens: BTreeSet<String>,
}
