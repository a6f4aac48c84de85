// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suggestion assembly: where history, trending and templates meet.
//!
//! The pipeline fills slots in a fixed order and stops as soon as `limit` is reached:
//!
//! 1. Interests, heaviest first. Each tries to claim a trending headline; if there is
//!    none, or the guard rejects it, the interest gets a synthesized headline instead.
//! 2. Unclaimed trending headlines, in feed order.
//! 3. Curated fallback briefings.
//!
//! Every candidate passes through [`AdmissionGuard`], which is what keeps the output
//! free of repeats and near-duplicates. The pipeline itself cannot fail: empty or
//! junk input just falls through to the curated briefings.

pub mod dedup;

pub use dedup::{has_significant_overlap, Admitted, AdmissionGuard, Rejection};

use crate::clock::{Clock, MonthYear, SystemClock};
use crate::config::SuggestConfig;
use crate::contracts::check_suggestions;
use crate::interests::aggregate_interests;
use crate::templates::{fallback_headlines, synthesize};
use crate::tokenize::canonicalize;
use crate::trending::{build_trending_entries, find_best_match};
use crate::types::{CanonicalInterest, Suggestion, SuggestionSource};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

const TRENDING_REASON: &str = "What people are following right now";
const FALLBACK_REASON: &str = "Curated briefing picked for you";

fn matched_reason(interest: &CanonicalInterest) -> String {
    match interest.source {
        SuggestionSource::Search => format!("Linked to your \"{}\" searches", interest.label),
        _ => format!("Because you explored \"{}\"", interest.label),
    }
}

fn synthesized_reason(interest: &CanonicalInterest) -> String {
    match interest.source {
        SuggestionSource::Search => {
            format!("Fresh angle pulled from your \"{}\" searches", interest.label)
        }
        _ => format!("Fresh angle based on \"{}\"", interest.label),
    }
}

fn history_keys<S, E>(search_terms: &[S], explore_topics: &[E]) -> HashSet<String>
where
    S: AsRef<str>,
    E: AsRef<str>,
{
    search_terms
        .iter()
        .map(|term| term.as_ref())
        .chain(explore_topics.iter().map(|topic| topic.as_ref()))
        .filter_map(canonicalize)
        .map(|canonical| canonical.normalized)
        .collect()
}

fn admit(
    guard: &mut AdmissionGuard,
    suggestion: Suggestion,
    tokens: Option<BTreeSet<String>>,
) -> bool {
    let query = suggestion.query.clone();
    match guard.try_admit(suggestion, tokens) {
        Ok(()) => true,
        Err(rejection) => {
            debug!(query = %query, reason = %rejection, "candidate rejected");
            false
        }
    }
}

/// Run the full pipeline for one month.
fn assemble<S, E, T>(
    search_terms: &[S],
    explore_topics: &[E],
    trending_topics: &[T],
    limit: usize,
    config: &SuggestConfig,
    period: MonthYear,
) -> Vec<Admitted>
where
    S: AsRef<str>,
    E: AsRef<str>,
    T: AsRef<str>,
{
    let history = history_keys(search_terms, explore_topics);
    let interests = aggregate_interests(search_terms, explore_topics, config.weights);
    let entries = build_trending_entries(trending_topics);
    debug!(
        interests = interests.len(),
        trending = entries.len(),
        history = history.len(),
        limit,
        "assembling suggestions"
    );

    let mut guard = AdmissionGuard::new(history, config.overlap);
    let mut used_trending: HashSet<usize> = HashSet::new();

    for (rank, interest) in interests.iter().enumerate() {
        if guard.len() >= limit {
            break;
        }

        if let Some(entry) = find_best_match(interest, &entries, &used_trending, guard.history()) {
            let candidate = Suggestion {
                query: entry.topic.clone(),
                reason: matched_reason(interest),
                source: interest.source,
            };
            if admit(&mut guard, candidate, Some(entry.tokens.clone())) {
                used_trending.insert(entry.index);
                continue;
            }
        }

        let offset = guard.len() + rank;
        let headline = synthesize(&interest.label, &interest.tokens, offset, period);
        debug!(interest = %interest.label, headline = %headline, "synthesized headline");
        let candidate = Suggestion {
            query: headline,
            reason: synthesized_reason(interest),
            source: interest.source,
        };
        admit(&mut guard, candidate, Some(interest.token_set()));
    }

    for entry in &entries {
        if guard.len() >= limit {
            break;
        }
        if used_trending.contains(&entry.index) {
            continue;
        }
        let candidate = Suggestion {
            query: entry.topic.clone(),
            reason: TRENDING_REASON.to_string(),
            source: SuggestionSource::Trending,
        };
        if admit(&mut guard, candidate, Some(entry.tokens.clone())) {
            used_trending.insert(entry.index);
        }
    }

    for headline in fallback_headlines(period) {
        if guard.len() >= limit {
            break;
        }
        let candidate = Suggestion {
            query: headline,
            reason: FALLBACK_REASON.to_string(),
            source: SuggestionSource::Fallback,
        };
        admit(&mut guard, candidate, None);
    }

    check_suggestions(guard.admitted(), limit, guard.history(), config.overlap);
    guard.into_admitted(limit)
}

/// Configurable entry point.
///
/// ```
/// use newsglide::{FixedClock, MonthYear, SuggestionBuilder, SuggestionSource};
///
/// let trending = ["Chess prodigy wins title"];
/// let builder = SuggestionBuilder::new().with_clock(FixedClock(MonthYear::new(10, 2026).unwrap()));
/// let suggestions = builder.build(&["Jeff Bezos"], &[] as &[&str], &trending);
///
/// assert_eq!(suggestions[0].query, "Jeff Bezos' October 2026 strategy reset");
/// assert_eq!(suggestions[1].source, SuggestionSource::Trending);
/// ```
#[derive(Debug, Clone)]
pub struct SuggestionBuilder<C = SystemClock> {
    config: SuggestConfig,
    clock: C,
}

impl SuggestionBuilder<SystemClock> {
    /// Default config, wall clock.
    pub fn new() -> Self {
        Self {
            config: SuggestConfig::default(),
            clock: SystemClock,
        }
    }
}

impl Default for SuggestionBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SuggestionBuilder<C> {
    pub fn with_config(mut self, config: SuggestConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_clock<D: Clock>(self, clock: D) -> SuggestionBuilder<D> {
        SuggestionBuilder {
            config: self.config,
            clock,
        }
    }

    pub fn config(&self) -> &SuggestConfig {
        &self.config
    }

    /// Build up to `config.limit` suggestions.
    pub fn build<S, E, T>(
        &self,
        search_terms: &[S],
        explore_topics: &[E],
        trending_topics: &[T],
    ) -> Vec<Suggestion>
    where
        S: AsRef<str>,
        E: AsRef<str>,
        T: AsRef<str>,
    {
        self.build_with_limit(search_terms, explore_topics, trending_topics, self.config.limit)
    }

    /// Build up to `limit` suggestions, ignoring `config.limit`.
    pub fn build_with_limit<S, E, T>(
        &self,
        search_terms: &[S],
        explore_topics: &[E],
        trending_topics: &[T],
        limit: usize,
    ) -> Vec<Suggestion>
    where
        S: AsRef<str>,
        E: AsRef<str>,
        T: AsRef<str>,
    {
        self.build_admitted(search_terms, explore_topics, trending_topics, limit)
            .into_iter()
            .map(|admitted| admitted.suggestion)
            .collect()
    }

    /// Like [`build_with_limit`](Self::build_with_limit), but keeps the token set
    /// each suggestion was admitted under.
    pub fn build_admitted<S, E, T>(
        &self,
        search_terms: &[S],
        explore_topics: &[E],
        trending_topics: &[T],
        limit: usize,
    ) -> Vec<Admitted>
    where
        S: AsRef<str>,
        E: AsRef<str>,
        T: AsRef<str>,
    {
        let period = self.clock.month_year();
        assemble(search_terms, explore_topics, trending_topics, limit, &self.config, period)
    }
}

/// Build suggestions with default tuning and the wall clock.
pub fn build_suggestions<S, E, T>(
    search_terms: &[S],
    explore_topics: &[E],
    trending_topics: &[T],
    limit: usize,
) -> Vec<Suggestion>
where
    S: AsRef<str>,
    E: AsRef<str>,
    T: AsRef<str>,
{
    SuggestionBuilder::new().build_with_limit(search_terms, explore_topics, trending_topics, limit)
}

/// Build suggestions with default tuning for the month reported by `clock`.
pub fn build_suggestions_at<S, E, T>(
    search_terms: &[S],
    explore_topics: &[E],
    trending_topics: &[T],
    limit: usize,
    clock: &dyn Clock,
) -> Vec<Suggestion>
where
    S: AsRef<str>,
    E: AsRef<str>,
    T: AsRef<str>,
{
    assemble(
        search_terms,
        explore_topics,
        trending_topics,
        limit,
        &SuggestConfig::default(),
        clock.month_year(),
    )
    .into_iter()
    .map(|admitted| admitted.suggestion)
    .collect()
}
