//! Personalized news search suggestions with topic deduplication.
//!
//! Given what a user searched, what they explored, and what is trending, pick a
//! handful of suggestions that are relevant, fresh, and not the same story three
//! times over.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenize.rs │────▶│ interests.rs │────▶│              │
//! │ (tokenize,  │     │ (aggregate)  │     │              │
//! │ canonicalize│     └──────────────┘     │  suggest/    │
//! └─────────────┘     ┌──────────────┐     │  (assemble)  │
//!        │            │ trending.rs  │────▶│              │
//!        └───────────▶│ + scoring/   │     │              │
//!                     └──────────────┘     │              │
//!                     ┌──────────────┐     │              │
//!                     │ templates.rs │────▶│              │
//!                     │ + clock.rs   │     └──────┬───────┘
//!                     └──────────────┘            │
//!                                                 ▼
//!                              ┌────────────────────────────────────┐
//!                              │ suggest/dedup.rs (AdmissionGuard)  │
//!                              │ contracts.rs (debug re-checks)     │
//!                              └────────────────────────────────────┘
//! ```
//!
//! `sources` and `history` sit outside the pipeline: they fetch and persist the
//! topic lists the pipeline consumes.
//!
//! # Usage
//!
//! ```
//! use newsglide::{build_suggestions_at, FixedClock, MonthYear, SuggestionSource};
//!
//! let clock = FixedClock(MonthYear::new(10, 2026).unwrap());
//! let none: &[&str] = &[];
//! let suggestions = build_suggestions_at(none, none, none, 3, &clock);
//!
//! assert_eq!(suggestions.len(), 3);
//! assert!(suggestions.iter().all(|s| s.source == SuggestionSource::Fallback));
//! ```

// Module declarations
pub mod clock;
pub mod config;
pub mod contracts;
pub mod error;
pub mod history;
pub mod interests;
pub mod scoring;
pub mod sources;
pub mod suggest;
pub mod templates;
pub mod testing;
pub mod tokenize;
pub mod trending;
mod types;

// Re-exports for public API
pub use clock::{Clock, FixedClock, MonthYear, SystemClock};
pub use config::{OverlapPolicy, SourceWeights, SuggestConfig};
pub use error::{Error, Result};
pub use history::RecentTopics;
pub use interests::aggregate_interests;
pub use sources::{
    personalize, resolve_topics, JsonFileTopics, Personalized, StaticTopics, TopicSource,
};
pub use suggest::{
    build_suggestions, build_suggestions_at, has_significant_overlap, Admitted, AdmissionGuard,
    Rejection, SuggestionBuilder,
};
pub use tokenize::{canonicalize, normalize_key, tokenize, Canonical};
pub use trending::{build_trending_entries, find_best_match};
pub use types::{CanonicalInterest, Suggestion, SuggestionSource, TrendingEntry};
