// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by both engines.
//!
//! | Type         | Purpose                                                 |
//! |--------------|---------------------------------------------------------|
//! | `Symbol`     | What a text may be made of (totally ordered values)     |
//! | `Engine`     | Which construction/search strategy to use               |
//! | `LcpBounds`  | Cached LCP against a binary-search range's two boundaries |
//!
//! # Invariants
//!
//! - **Suffix array**: a permutation of `0..n`, suffixes non-decreasing.
//! - **Inverse**: `array[inverse[p]] == p` for every text position `p`.
//! - **LCP**: `lcp.len() == n + 1` (empty when `n == 0`), `lcp[0] == lcp[n] == 0`.
//! - **LCP cache**: `lcp_lr.len() == n`, one entry per midpoint slot.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A symbol that can be indexed: equality plus a total order.
///
/// With the `parallel` feature the reference engine sorts across threads, so
/// symbols must also be `Sync` there.
#[cfg(feature = "parallel")]
pub trait Symbol: Ord + Sync {}

#[cfg(feature = "parallel")]
impl<T: Ord + Sync> Symbol for T {}

/// A symbol that can be indexed: equality plus a total order.
#[cfg(not(feature = "parallel"))]
pub trait Symbol: Ord {}

#[cfg(not(feature = "parallel"))]
impl<T: Ord> Symbol for T {}

/// Suffix array construction and search strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Engine {
    /// Direct suffix sort and plain binary search. Slow, obviously correct.
    BruteForce,
    /// Prefix doubling, Kasai LCP, LCP-accelerated search.
    #[default]
    PrefixDoubling,
}

impl Engine {
    pub const ALL: [Engine; 2] = [Engine::BruteForce, Engine::PrefixDoubling];

    pub fn name(self) -> &'static str {
        match self {
            Engine::BruteForce => "brute-force",
            Engine::PrefixDoubling => "prefix-doubling",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Engine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brute-force" | "brute" | "naive" => Ok(Engine::BruteForce),
            "prefix-doubling" | "doubling" | "pd" => Ok(Engine::PrefixDoubling),
            other => Err(format!(
                "unknown engine '{}' (expected brute-force or prefix-doubling)",
                other
            )),
        }
    }
}

/// LCP of a midpoint slot against the boundaries of the range it splits.
///
/// For a search range `(left, right)` with midpoint `mid`, `left` is the LCP
/// of the suffixes at slots `left - 1` and `mid`, `right` the LCP of the
/// suffixes at slots `mid` and `right`. A missing boundary counts as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LcpBounds {
    pub left: usize,
    pub right: usize,
}

impl LcpBounds {
    #[inline]
    pub fn min(self) -> usize {
        self.left.min(self.right)
    }
}
