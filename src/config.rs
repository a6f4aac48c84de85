// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for the suggestion pipeline.
//!
//! The defaults reproduce the behavior the web client shipped with. The overlap
//! policy in particular was tuned by hand against a handful of real histories;
//! treat it as a knob, not a law.
//!
//! ```json
//! {
//!   "limit": 3,
//!   "weights": { "search": 3, "explore": 2 },
//!   "overlap": { "minRatio": 0.5, "minShared": 2 }
//! }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default number of suggestions.
pub const DEFAULT_LIMIT: usize = 3;

/// Weight added per search-history occurrence.
pub const SEARCH_WEIGHT: u32 = 3;

/// Weight added per explored-topic occurrence.
pub const EXPLORE_WEIGHT: u32 = 2;

/// Shared tokens / larger set size at or above which two suggestions collide.
pub const OVERLAP_MIN_RATIO: f64 = 0.5;

/// Absolute shared token count at or above which two suggestions collide.
pub const OVERLAP_MIN_SHARED: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceWeights {
    pub search: u32,
    pub explore: u32,
}

impl Default for SourceWeights {
    fn default() -> Self {
        Self {
            search: SEARCH_WEIGHT,
            explore: EXPLORE_WEIGHT,
        }
    }
}

/// When two token sets count as near-duplicates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlapPolicy {
    pub min_ratio: f64,
    pub min_shared: usize,
}

impl Default for OverlapPolicy {
    fn default() -> Self {
        Self {
            min_ratio: OVERLAP_MIN_RATIO,
            min_shared: OVERLAP_MIN_SHARED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SuggestConfig {
    pub limit: usize,
    pub weights: SourceWeights,
    pub overlap: OverlapPolicy,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            weights: SourceWeights::default(),
            overlap: OverlapPolicy::default(),
        }
    }
}

impl SuggestConfig {
    /// Load a config file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: SuggestConfig =
            serde_json::from_str(&raw).map_err(|e| Error::json(path, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let ratio = self.overlap.min_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(Error::InvalidConfig(format!(
                "overlap.minRatio must be in (0, 1], got {}",
                ratio
            )));
        }
        if self.overlap.min_shared == 0 {
            return Err(Error::InvalidConfig(
                "overlap.minShared must be at least 1".to_string(),
            ));
        }
        if self.weights.search == 0 || self.weights.explore == 0 {
            return Err(Error::InvalidConfig(
                "weights must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
