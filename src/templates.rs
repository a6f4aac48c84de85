// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Headline templates for interests with no trending match.
//!
//! Selection is a hash, not a coin flip: the first letters of the interest's tokens
//! are summed and offset by how far the pipeline has got. The same inputs always
//! produce the same headlines, which keeps fixtures stable.
//!
//! None of these may say "latest" or "headline". Those words are stop words, and a
//! suggestion built from filler reads as filler.

use crate::clock::MonthYear;

/// Builds a headline from a subject label and the current month.
pub type TemplateFn = fn(&str, MonthYear) -> String;

/// Angles: strategy reset, deal tracker, policy showdown, innovation bets,
/// leadership reshuffles, milestones due.
pub const SUBJECT_TEMPLATES: [TemplateFn; 6] = [
    |subject, period| {
        format!(
            "{} {} {} strategy reset",
            format_possessive(subject),
            period.month_name(),
            period.year
        )
    },
    |subject, period| {
        format!(
            "{} deal tracker: who is moving in {} {}",
            subject,
            period.month_name(),
            period.year
        )
    },
    |subject, period| {
        format!(
            "{} policy showdown heading into {} {}",
            subject,
            period.month_name(),
            period.year
        )
    },
    |subject, period| {
        format!(
            "{} innovation bets to follow this {}",
            subject,
            period.month_name()
        )
    },
    |subject, period| format!("{} leadership reshuffles reshaping {}", subject, period.year),
    |subject, period| {
        format!(
            "{} milestones due before {} {} wraps",
            subject,
            period.month_name(),
            period.year
        )
    },
];

/// Curated briefings used when personalization runs dry.
pub const FALLBACK_TEMPLATES: [fn(MonthYear) -> String; 4] = [
    |period| format!("Global developments shaping {} {}", period.month_name(), period.year),
    |period| {
        format!(
            "Markets and policy shifts to track in {} {}",
            period.month_name(),
            period.year
        )
    },
    |period| {
        format!(
            "Science and innovation highlights from {} {}",
            period.month_name(),
            period.year
        )
    },
    |period| format!("Geopolitical briefings for {} {}", period.month_name(), period.year),
];

/// "Jeff Bezos" → "Jeff Bezos'", "NASA" → "NASA's".
pub fn format_possessive(subject: &str) -> String {
    if subject.ends_with('s') || subject.ends_with('S') {
        format!("{}'", subject)
    } else {
        format!("{}'s", subject)
    }
}

/// Sum of the first character code of every token.
pub fn template_seed<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens
        .iter()
        .filter_map(|token| token.as_ref().chars().next())
        .map(|c| c as usize)
        .sum()
}

/// Which subject template to use for a seed and pipeline offset.
pub fn template_index(seed: usize, offset: usize) -> usize {
    seed.wrapping_add(offset) % SUBJECT_TEMPLATES.len()
}

/// Synthesize a headline about `label`.
///
/// `offset` is the number of suggestions admitted so far plus the interest's rank,
/// so an interest retried later in a run can land on a different angle.
pub fn synthesize<S: AsRef<str>>(label: &str, tokens: &[S], offset: usize, period: MonthYear) -> String {
    let idx = template_index(template_seed(tokens), offset);
    SUBJECT_TEMPLATES[idx](label, period)
}

/// All fallback headlines for `period`, in fixed order.
pub fn fallback_headlines(period: MonthYear) -> Vec<String> {
    FALLBACK_TEMPLATES.iter().map(|template| template(period)).collect()
}
