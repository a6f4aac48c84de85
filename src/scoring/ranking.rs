// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interest ranking: which topics get a slot first.
//!
//! Heavier interests go first. Equal weights keep the order they were first seen in,
//! so search history (aggregated before explored topics) wins ties. That relies on
//! `sort_by` being stable, which it is.

use crate::types::CanonicalInterest;
use std::cmp::Ordering;

/// Compare two interests for ranking: higher weight first.
pub fn compare_interests(a: &CanonicalInterest, b: &CanonicalInterest) -> Ordering {
    b.weight.cmp(&a.weight)
}

/// Sort interests in place by descending weight, keeping insertion order on ties.
pub fn rank_interests(interests: &mut [CanonicalInterest]) {
    interests.sort_by(compare_interests);
}
