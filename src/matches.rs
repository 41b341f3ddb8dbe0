// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Lazy iterator over the occurrences of a pattern.
//!
//! Both engines locate the first matching suffix-array slot eagerly and then
//! hand back a [`Matches`] that walks forward slot by slot. Occurrences come
//! out in suffix-array order, which is **not** ascending text order. Use
//! [`Matches::into_sorted`] when text order matters.
//!
//! ```text
//! slot:    0      1      2      3      4      5
//! array:  [5]    [3]    [1]    [0]    [4]    [2]      text = "banana"
//! suffix:  a     ana    anana  banana na     nana
//! lcp:     0      1      3      0      0      2
//!                 └──────┘  pattern "ana": start at slot 1,
//!                           continue while lcp[slot] >= 3
//! ```
//!
//! The empty pattern occurs at every offset `0..=n`. After the suffix-array
//! slots are exhausted the iterator yields `n` itself (the empty suffix at
//! the end of the text), which has no slot of its own.

use std::iter::FusedIterator;

#[derive(Debug, Clone, Copy)]
enum Bound<'a> {
    /// Exclusive end of a fixed slot range; the start is `Matches::start`.
    Slots(usize),
    /// Run continues while `lcp[slot] >= min`.
    Lcp { lcp: &'a [usize], min: usize },
}

/// Occurrence positions produced by `find_all`.
#[derive(Debug, Clone)]
pub struct Matches<'a> {
    array: &'a [usize],
    start: usize,
    slot: usize,
    bound: Bound<'a>,
    trailing: Option<usize>,
}

impl<'a> Matches<'a> {
    /// No occurrences.
    pub(crate) fn none() -> Self {
        Matches {
            array: &[],
            start: 0,
            slot: 0,
            bound: Bound::Slots(0),
            trailing: None,
        }
    }

    /// Occurrences occupying slots `[start, end)` of `array`.
    pub(crate) fn slot_range(array: &'a [usize], start: usize, end: usize) -> Self {
        Matches {
            array,
            start,
            slot: start,
            bound: Bound::Slots(end.min(array.len())),
            trailing: None,
        }
    }

    /// Occurrences starting at `start` and continuing while consecutive
    /// suffixes share at least `min` symbols.
    pub(crate) fn lcp_run(array: &'a [usize], lcp: &'a [usize], start: usize, min: usize) -> Self {
        Matches {
            array,
            start,
            slot: start,
            bound: Bound::Lcp { lcp, min },
            trailing: None,
        }
    }

    /// Append the end-of-text offset (empty-pattern occurrences only).
    pub(crate) fn with_end_of_text(mut self, text_len: usize) -> Self {
        self.trailing = Some(text_len);
        self
    }

    /// Collect the remaining occurrences in ascending text order.
    pub fn into_sorted(self) -> Vec<usize> {
        let mut positions: Vec<usize> = self.collect();
        positions.sort_unstable();
        positions
    }

    fn slot_open(&self) -> bool {
        if self.slot >= self.array.len() {
            return false;
        }
        match self.bound {
            Bound::Slots(end) => self.slot < end,
            Bound::Lcp { lcp, min } => self.slot == self.start || lcp[self.slot] >= min,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.slot_open() {
            let position = self.array[self.slot];
            self.slot += 1;
            return Some(position);
        }
        // A closed run never reopens: matching suffixes are contiguous.
        self.slot = self.array.len();
        self.trailing.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let extra = usize::from(self.trailing.is_some());
        let remaining = self.array.len().saturating_sub(self.slot);
        match self.bound {
            Bound::Slots(end) => {
                let exact = end.saturating_sub(self.slot) + extra;
                (exact, Some(exact))
            }
            Bound::Lcp { .. } => {
                let lower = usize::from(self.slot_open()) + extra;
                (lower, Some(remaining + extra))
            }
        }
    }
}

impl FusedIterator for Matches<'_> {}
