// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix array by prefix doubling, with LCP-accelerated search.
//!
//! Construction runs in three strictly sequential phases:
//!
//! 1. [`naming`]: rank every suffix by repeatedly doubling the compared
//!    prefix length (O(n log n)).
//! 2. [`lcp`]: Kasai's LCP array, then the interval cache over it (O(n)).
//! 3. Debug-build contracts over everything just built.
//!
//! Queries ([`search`]) locate the first matching slot in O(m + log n) and
//! then walk forward while the LCP with the previous suffix covers the whole
//! pattern.

mod lcp;
mod naming;
mod search;

use crate::matches::Matches;
use crate::types::{LcpBounds, Symbol};
use crate::verify::contracts;

/// Suffix array with inverse, LCP array and LCP-interval cache.
#[derive(Debug, Clone)]
pub struct PrefixDoublingSuffixArray<'a, T> {
    text: &'a [T],
    array: Vec<usize>,
    inverse: Vec<usize>,
    lcp: Vec<usize>,
    lcp_lr: Vec<LcpBounds>,
    rounds: usize,
}

impl<'a, T: Symbol> PrefixDoublingSuffixArray<'a, T> {
    pub fn new(text: &'a [T]) -> Self {
        let n = text.len();
        let naming::Ranking { names, rounds } = naming::rank_suffixes(text);
        contracts::check_names_injective(&names);

        // Final names are distinct ranks, so they invert directly.
        let mut array = vec![0usize; n];
        for (pos, &name) in names.iter().enumerate() {
            array[name] = pos;
        }
        let inverse = names;

        let lcp = lcp::lcp_array(text, &array, &inverse);
        let lcp_lr = lcp::lcp_intervals(&lcp);
        log::debug!(
            "prefix-doubling suffix array built over {} symbols ({} rounds)",
            n,
            rounds
        );

        contracts::check_inverse(&array, &inverse);
        contracts::check_suffix_array_sorted(text, &array);
        contracts::check_lcp_correct(text, &array, &lcp);
        contracts::check_rounds_bound(n, rounds);

        PrefixDoublingSuffixArray {
            text,
            array,
            inverse,
            lcp,
            lcp_lr,
            rounds,
        }
    }

    /// The indexed text.
    pub fn text(&self) -> &'a [T] {
        self.text
    }

    /// Text positions in suffix order.
    pub fn array(&self) -> &[usize] {
        &self.array
    }

    /// `inverse[pos]` is the slot holding `pos`.
    pub fn inverse(&self) -> &[usize] {
        &self.inverse
    }

    /// LCP of each slot with its predecessor; length `n + 1`, empty for `n == 0`.
    pub fn lcp(&self) -> &[usize] {
        &self.lcp
    }

    /// Cached boundary LCPs, one entry per slot.
    pub fn lcp_lr(&self) -> &[LcpBounds] {
        &self.lcp_lr
    }

    /// Doubling rounds the construction needed.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Every position `p` with `text[p..p + pattern.len()] == pattern`, in
    /// suffix-array order.
    pub fn find_all(&self, pattern: &[T]) -> Matches<'_> {
        let m = pattern.len();
        if m == 0 {
            return Matches::lcp_run(&self.array, &self.lcp, 0, 0)
                .with_end_of_text(self.text.len());
        }

        let found = search::lower_bound(self.text, &self.array, &self.lcp_lr, pattern);
        log::trace!(
            "find_all: m = {}, slot {}, {} scans, {} cached steps",
            m,
            found.slot,
            found.scans,
            found.skips
        );

        if found.matched == m && found.slot < self.array.len() {
            Matches::lcp_run(&self.array, &self.lcp, found.slot, m)
        } else {
            Matches::none()
        }
    }

    /// Number of occurrences of `pattern`.
    pub fn count(&self, pattern: &[T]) -> usize {
        self.find_all(pattern).count()
    }

    pub fn contains(&self, pattern: &[T]) -> bool {
        self.find_all(pattern).next().is_some()
    }
}
