// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the newsglide command-line interface.
//!
//! Three subcommands: `suggest` to run the pipeline over a JSON payload,
//! `tokenize` to see how a phrase canonicalizes, and `track` to record an
//! explored topic in a local store that `suggest` can read back.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "newsglide",
    about = "Personalized news search suggestions",
    version
)]
pub struct Cli {
    /// Log pipeline decisions to stderr (overridden by NEWSGLIDE_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build suggestions from a JSON payload
    ///
    /// The payload has optional `searchTerms`, `exploreTopics` and
    /// `trendingTopics` arrays. Reads stdin when --input is omitted.
    Suggest {
        /// Payload file (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// JSON array of trending headlines, appended to the payload's
        ///
        /// A missing or malformed file degrades the run instead of failing it.
        #[arg(long)]
        trending: Option<PathBuf>,

        /// Explored-topics store written by `track`
        #[arg(long)]
        explored_store: Option<PathBuf>,

        /// Tuning config (limit, weights, overlap policy)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Maximum number of suggestions (overrides config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Month used in headline templates, 1-12 (requires --year)
        #[arg(long, requires = "year")]
        month: Option<u32>,

        /// Year used in headline templates (requires --month)
        #[arg(long, requires = "month")]
        year: Option<i32>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show how a phrase tokenizes and canonicalizes
    Tokenize {
        /// Phrase to inspect
        text: String,
    },

    /// Record an explored topic in a local store
    Track {
        /// Store file (created if missing)
        #[arg(short, long)]
        store: PathBuf,

        /// Maximum topics kept
        #[arg(long)]
        capacity: Option<usize>,

        /// Topic to record
        topic: String,
    },
}
