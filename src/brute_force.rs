// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reference suffix array: sort positions by comparing whole suffixes.
//!
//! O(n² log n) in the worst case. It exists to be obviously correct, so the
//! prefix-doubling engine has something to be checked against.

use crate::matches::Matches;
use crate::types::Symbol;
use crate::utils::{suffix_at, window_at};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Suffix array built by direct lexicographic sort of suffix slices.
#[derive(Debug, Clone)]
pub struct BruteForceSuffixArray<'a, T> {
    text: &'a [T],
    array: Vec<usize>,
}

impl<'a, T: Symbol> BruteForceSuffixArray<'a, T> {
    /// Sort every suffix position by the suffix it starts.
    pub fn new(text: &'a [T]) -> Self {
        let mut array: Vec<usize> = (0..text.len()).collect();

        #[cfg(feature = "parallel")]
        {
            array.par_sort_by(|&a, &b| suffix_at(text, a).cmp(suffix_at(text, b)));
        }
        #[cfg(not(feature = "parallel"))]
        {
            array.sort_by(|&a, &b| suffix_at(text, a).cmp(suffix_at(text, b)));
        }

        log::debug!("brute-force suffix array built over {} symbols", text.len());
        BruteForceSuffixArray { text, array }
    }

    /// The indexed text.
    pub fn text(&self) -> &'a [T] {
        self.text
    }

    /// Text positions in suffix order.
    pub fn array(&self) -> &[usize] {
        &self.array
    }

    pub fn len(&self) -> usize {
        self.array.len()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Every position `p` with `text[p..p + pattern.len()] == pattern`.
    ///
    /// Two binary searches bracket the slots whose first `pattern.len()`
    /// symbols compare equal to `pattern`; the bracket is walked lazily.
    pub fn find_all(&self, pattern: &[T]) -> Matches<'_> {
        let m = pattern.len();
        let prefix_cmp = |pos: usize| window_at(self.text, pos, m).cmp(pattern);

        // bisect_left / bisect_right over the truncated suffixes
        let start = self
            .array
            .partition_point(|&pos| prefix_cmp(pos) == Ordering::Less);
        let end = self
            .array
            .partition_point(|&pos| prefix_cmp(pos) != Ordering::Greater);

        let matches = Matches::slot_range(&self.array, start, end);
        if m == 0 {
            matches.with_end_of_text(self.text.len())
        } else {
            matches
        }
    }
}
