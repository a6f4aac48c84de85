// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: which interest goes first, and which headline fits it.
//!
//! Weight decides the order interests are served in. Match score decides which
//! trending headline an interest claims. Neither crosses into the other.

mod core;
pub mod ranking;

pub use core::*;
