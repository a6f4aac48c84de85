// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Recently explored topics, persisted between runs.
//!
//! Most recent first, one entry per canonical key. Recording "AI regulation" after
//! "ai regulation news" replaces the older entry and moves it to the front.

use crate::error::{Error, Result};
use crate::sources::TopicSource;
use crate::tokenize::normalize_key;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Default number of topics kept.
pub const DEFAULT_CAPACITY: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentTopics {
    capacity: usize,
    topics: Vec<String>,
}

impl Default for RecentTopics {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl RecentTopics {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            topics: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the capacity, dropping the oldest topics if needed.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.topics.truncate(capacity);
    }

    /// Topics, most recent first.
    pub fn topics(&self) -> &[String] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Record a topic. Returns `false` if it has no meaningful tokens.
    pub fn record(&mut self, topic: &str) -> bool {
        let topic = topic.trim();
        let key = normalize_key(topic);
        if key.is_empty() {
            return false;
        }
        self.topics.retain(|existing| normalize_key(existing) != key);
        self.topics.insert(0, topic.to_string());
        self.topics.truncate(self.capacity);
        true
    }

    /// Load a store. A missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| Error::json(path, e)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Write atomically: temp file in the same directory, then rename over `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

        let temp = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
        {
            let mut writer = BufWriter::new(temp.as_file());
            serde_json::to_writer_pretty(&mut writer, self).map_err(|e| Error::json(path, e))?;
            writer.flush().map_err(|e| Error::io(path, e))?;
        }
        temp.persist(path).map_err(|e| Error::io(path, e.error))?;
        Ok(())
    }
}

impl TopicSource for RecentTopics {
    fn name(&self) -> &str {
        "recent-topics"
    }

    fn topics(&self) -> Result<Vec<String>> {
        Ok(self.topics.clone())
    }
}
