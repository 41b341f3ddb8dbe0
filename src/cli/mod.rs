// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the sufarray command-line interface.
//!
//! Three subcommands: `build` to construct an index and summarize it,
//! `search` to list a pattern's occurrences, and `verify` to recheck every
//! structure an engine builds. Input is a text file (one symbol per char)
//! or, with `--json-input`, a JSON string, integer array, or token array.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use sufarray::Engine;

#[derive(Parser)]
#[command(
    name = "sufarray",
    about = "Suffix array construction and substring search",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Input file to index ("-" reads stdin)
    pub input: PathBuf,

    /// Construction engine: brute-force or prefix-doubling
    #[arg(short, long, default_value_t = Engine::PrefixDoubling)]
    pub engine: Engine,

    /// Parse the input (and the search pattern) as JSON symbols
    #[arg(long)]
    pub json_input: bool,

    /// Print a JSON report instead of the formatted summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a suffix array and summarize it
    Build {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Find every occurrence of a pattern
    Search {
        #[command(flatten)]
        input: InputArgs,

        /// Pattern to search for (JSON with --json-input)
        pattern: String,

        /// List positions in ascending text order instead of suffix order
        #[arg(long)]
        sorted: bool,

        /// Maximum number of positions to print
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Rebuild and check every invariant of the index
    Verify {
        #[command(flatten)]
        input: InputArgs,
    },
}
