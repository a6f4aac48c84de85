// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Where topics come from, and what happens when a source is down.
//!
//! Search history, tracked interests and trending headlines each live behind
//! something that can fail. A failed source is not fatal: it contributes an empty
//! list, the run is marked degraded, and the user still gets suggestions (in the
//! worst case, the curated briefings).

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::suggest::SuggestionBuilder;
use crate::types::Suggestion;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::warn;

/// Shown to the user when any source failed.
pub const DEGRADED_NOTICE: &str = "Could not personalize suggestions right now";

/// A list of topic strings from somewhere.
pub trait TopicSource {
    /// Short name for logs.
    fn name(&self) -> &str;

    fn topics(&self) -> Result<Vec<String>>;
}

/// Topics already in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticTopics {
    name: String,
    topics: Vec<String>,
}

impl StaticTopics {
    pub fn new(name: impl Into<String>, topics: Vec<String>) -> Self {
        Self {
            name: name.into(),
            topics,
        }
    }
}

impl TopicSource for StaticTopics {
    fn name(&self) -> &str {
        &self.name
    }

    fn topics(&self) -> Result<Vec<String>> {
        Ok(self.topics.clone())
    }
}

/// A JSON array of strings on disk.
#[derive(Debug, Clone)]
pub struct JsonFileTopics {
    name: String,
    path: PathBuf,
}

impl JsonFileTopics {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

impl TopicSource for JsonFileTopics {
    fn name(&self) -> &str {
        &self.name
    }

    fn topics(&self) -> Result<Vec<String>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        serde_json::from_str(&raw).map_err(|e| Error::json(&self.path, e))
    }
}

/// Suggestions plus whether any source had to be skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Personalized {
    pub suggestions: Vec<Suggestion>,
    pub degraded: bool,
}

impl Personalized {
    /// User-facing notice when personalization fell short.
    pub fn notice(&self) -> Option<&'static str> {
        self.degraded.then_some(DEGRADED_NOTICE)
    }
}

/// Fetch a source's topics, or log and flag `degraded` and return nothing.
pub fn resolve_topics(source: &dyn TopicSource, degraded: &mut bool) -> Vec<String> {
    match source.topics() {
        Ok(topics) => topics,
        Err(e) => {
            warn!(source = source.name(), error = %e, "topic source failed; continuing without it");
            *degraded = true;
            Vec::new()
        }
    }
}

/// Resolve all three sources, then run the pipeline once.
pub fn personalize<C: Clock>(
    history: &dyn TopicSource,
    explored: &dyn TopicSource,
    trending: &dyn TopicSource,
    builder: &SuggestionBuilder<C>,
) -> Personalized {
    let mut degraded = false;
    let search_terms = resolve_topics(history, &mut degraded);
    let explore_topics = resolve_topics(explored, &mut degraded);
    let trending_topics = resolve_topics(trending, &mut degraded);

    Personalized {
        suggestions: builder.build(&search_terms, &explore_topics, &trending_topics),
        degraded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixed_clock;
    use crate::types::SuggestionSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    struct Down;

    impl TopicSource for Down {
        fn name(&self) -> &str {
            "trending-api"
        }

        fn topics(&self) -> Result<Vec<String>> {
            Err(Error::Source {
                name: "trending-api".to_string(),
                reason: "503 Service Unavailable".to_string(),
            })
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn healthy_sources_are_not_degraded() {
        let builder = SuggestionBuilder::new().with_clock(fixed_clock());
        let result = personalize(
            &StaticTopics::new("history", strings(&["Mars rovers"])),
            &StaticTopics::default(),
            &StaticTopics::new("trending", strings(&["Mars rovers find ancient lake bed"])),
            &builder,
        );
        assert!(!result.degraded);
        assert!(result.notice().is_none());
        assert_eq!(result.suggestions[0].query, "Mars rovers find ancient lake bed");
    }

    #[test]
    fn failed_source_degrades_but_still_suggests() {
        let builder = SuggestionBuilder::new().with_clock(fixed_clock());
        let result = personalize(
            &StaticTopics::new("history", strings(&["Mars rovers"])),
            &StaticTopics::default(),
            &Down,
            &builder,
        );
        assert!(result.degraded);
        assert_eq!(result.notice(), Some(DEGRADED_NOTICE));
        assert_eq!(result.suggestions.len(), 3);
        assert_eq!(result.suggestions[0].source, SuggestionSource::Search);
    }

    #[test]
    fn everything_down_yields_curated_briefings() {
        let builder = SuggestionBuilder::new().with_clock(fixed_clock());
        let result = personalize(&Down, &Down, &Down, &builder);
        assert!(result.degraded);
        assert!(result
            .suggestions
            .iter()
            .all(|s| s.source == SuggestionSource::Fallback));
    }

    #[test]
    fn resolve_topics_flags_only_failures() {
        let mut degraded = false;
        let inline = StaticTopics::new("trending", strings(&["Chess prodigy wins title"]));
        let mut topics = resolve_topics(&inline, &mut degraded);
        assert!(!degraded);

        topics.extend(resolve_topics(&Down, &mut degraded));
        assert!(degraded);
        assert_eq!(topics, strings(&["Chess prodigy wins title"]));
    }

    #[test]
    fn json_file_source_reads_arrays() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"["Ocean cleanup", "Chess"]"#).unwrap();
        let source = JsonFileTopics::new("trending", file.path());
        assert_eq!(source.topics().unwrap(), strings(&["Ocean cleanup", "Chess"]));
    }

    #[test]
    fn json_file_source_reports_bad_shape() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "topics": [] }}"#).unwrap();
        let source = JsonFileTopics::new("trending", file.path());
        assert!(matches!(source.topics(), Err(Error::Json { .. })));
    }
}
