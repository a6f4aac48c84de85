// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization and canonical phrase keys.
//!
//! Everything downstream compares phrases through the tokens produced here, so the
//! rules are deliberately blunt: lowercase, keep `[a-z0-9-]`, drop stop words,
//! numbers and single characters, keep first occurrences only.
//!
//! "Latest AI news for March 2025" and "ai" canonicalize to the same key (`ai`),
//! which is the whole point: filler words and dates should never make two
//! suggestions look different.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use std::collections::HashSet;
use std::sync::LazyLock;

/// Month names plus generic news filler.
pub const STOP_WORDS: &[&str] = &[
    // Months
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
    // News filler
    "latest",
    "breaking",
    "news",
    "today",
    "tonight",
    "update",
    "updates",
    "developments",
    "story",
    "stories",
    "headline",
    "headlines",
    "coverage",
    "report",
    "reports",
    "analysis",
    "briefing",
    "insights",
    "fresh",
    "take",
    "new",
    "recent",
    "watch",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Check if a lowercase token is a stop word.
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}

/// A phrase reduced to its dedup identity plus a display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canonical {
    pub key: String,
    pub label: String,
    /// Dedup key (equal to `key`).
    pub normalized: String,
    pub tokens: Vec<String>,
}

/// Lowercase and fold diacritics ("Café" → "cafe").
#[cfg(feature = "unicode-normalization")]
fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// Lowercase only. Non-ASCII letters fall to the punctuation filter.
#[cfg(not(feature = "unicode-normalization"))]
fn fold(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |
        '\u{1DC0}'..='\u{1DFF}' |
        '\u{20D0}'..='\u{20FF}' |
        '\u{FE20}'..='\u{FE2F}'
    )
}

fn is_kept_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-'
}

fn is_droppable(token: &str) -> bool {
    token.chars().count() <= 1
        || token.chars().all(|c| c.is_ascii_digit())
        || is_stop_word(token)
}

/// Split text into ordered, unique, meaningful tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = fold(text)
        .chars()
        .map(|c| if is_kept_char(c) { c } else { ' ' })
        .collect();

    let mut seen = HashSet::new();
    let mut tokens = Vec::new();
    for token in cleaned.split_whitespace() {
        if is_droppable(token) {
            continue;
        }
        if seen.insert(token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Canonical key for a piece of text. Empty when nothing survives tokenization.
pub fn normalize_key(text: &str) -> String {
    tokenize(text).join(" ")
}

/// Title-case tokens for display. Short tokens (≤3 chars) are treated as acronyms.
pub fn title_case<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            if token.chars().count() <= 3 {
                token.to_uppercase()
            } else {
                let mut chars = token.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reduce a phrase to its canonical form.
///
/// Returns `None` for phrases with no meaningful tokens ("Latest news today",
/// "2024", "!!!"). Callers skip those silently.
pub fn canonicalize(text: &str) -> Option<Canonical> {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return None;
    }
    let key = tokens.join(" ");
    Some(Canonical {
        label: title_case(&tokens),
        normalized: key.clone(),
        key,
        tokens,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_lowercases() {
        assert_eq!(tokenize("Jeff Bezos: Innovations!"), vec!["jeff", "bezos", "innovations"]);
    }

    #[test]
    fn keeps_hyphenated_words() {
        assert_eq!(tokenize("Self-driving cars"), vec!["self-driving", "cars"]);
    }

    #[test]
    fn drops_stop_words_numbers_and_single_chars() {
        assert_eq!(tokenize("Latest AI news for March 2025 - a take"), vec!["ai", "for"]);
    }

    #[test]
    fn removes_later_duplicates() {
        assert_eq!(tokenize("rust Rust RUST compiler rust"), vec!["rust", "compiler"]);
    }

    #[test]
    fn canonicalize_rejects_filler_only_phrases() {
        assert!(canonicalize("").is_none());
        assert!(canonicalize("Breaking news today").is_none());
        assert!(canonicalize("2024 !!!").is_none());
    }

    #[test]
    fn canonicalize_builds_key_and_label() {
        let canonical = canonicalize("The latest on AI regulation").unwrap();
        assert_eq!(canonical.key, "the on ai regulation");
        assert_eq!(canonical.normalized, canonical.key);
        assert_eq!(canonical.label, "THE ON AI Regulation");
        assert_eq!(canonical.tokens.len(), 4);
    }

    #[test]
    fn title_case_uppercases_short_tokens() {
        assert_eq!(title_case(&["ai", "nasa", "eu"]), "AI Nasa EU");
    }

    #[test]
    fn apostrophes_split_tokens() {
        // "year's" becomes "year" + "s", and "s" is dropped as a single char
        assert_eq!(tokenize("this year's prize"), vec!["this", "year", "prize"]);
    }

    #[cfg(feature = "unicode-normalization")]
    #[test]
    fn folds_diacritics() {
        assert_eq!(tokenize("Café culture in Zürich"), vec!["cafe", "culture", "in", "zurich"]);
    }

    #[cfg(not(feature = "unicode-normalization"))]
    #[test]
    fn non_ascii_letters_split_words() {
        assert_eq!(tokenize("Café Zürich"), vec!["caf", "rich"]);
        assert_ne!(normalize_key("Café"), normalize_key("Cafe"));
    }

    #[test]
    fn stop_word_lookup() {
        assert!(is_stop_word("headlines"));
        assert!(is_stop_word("december"));
        assert!(!is_stop_word("physics"));
    }
}
