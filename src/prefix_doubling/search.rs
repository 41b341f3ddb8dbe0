// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LCP-accelerated lower-bound search.
//!
//! A plain binary search re-compares the pattern from its first symbol at
//! every midpoint. Here `matched` records how many pattern symbols agree
//! with the boundary on the side the search last narrowed from. The cached
//! LCP between the midpoint and that same boundary then decides most steps
//! without reading the text:
//!
//! | side  | cached vs `matched` | midpoint is       | move            |
//! |-------|---------------------|-------------------|-----------------|
//! | left  | greater             | below the pattern | `left = mid + 1`|
//! | left  | smaller             | above the pattern | `right = mid`   |
//! | right | greater             | at/above pattern  | `right = mid`   |
//! | right | smaller             | below the pattern | `left = mid + 1`|
//! | any   | equal               | unknown           | scan symbols    |
//!
//! Symbol scans start at `matched`, so `matched` never decreases and the
//! total scanning cost is O(m) on top of the O(log n) steps.

use crate::types::LcpBounds;
use std::cmp::Ordering;

/// Which boundary `matched` was measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    /// Nothing compared yet.
    First,
    /// Suffix at `left - 1`, known to sort below the pattern.
    Left,
    /// Suffix at `right`, known to sort at or above the pattern.
    Right,
}

/// Outcome of a lower-bound search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LowerBound {
    /// First slot whose suffix is not below the pattern.
    pub slot: usize,
    /// Pattern symbols matched against the boundary on `side`.
    pub matched: usize,
    /// Number of midpoints that needed a symbol scan.
    pub scans: usize,
    /// Number of midpoints decided from the cache alone.
    pub skips: usize,
}

/// Bisect-left over the suffix array using the interval cache.
pub(crate) fn lower_bound<T: Ord>(
    text: &[T],
    array: &[usize],
    lcp_lr: &[LcpBounds],
    pattern: &[T],
) -> LowerBound {
    let n = text.len();
    let m = pattern.len();
    let (mut left, mut right) = (0usize, array.len());
    let mut matched = 0usize;
    let mut side = Side::First;
    let (mut scans, mut skips) = (0usize, 0usize);

    while left < right {
        let mid = (left + right) / 2;
        // Cache decides when the midpoint diverges from the boundary at a
        // different depth than the pattern does.
        let decided = match side {
            Side::First => None,
            Side::Left => {
                let cached = lcp_lr[mid].left;
                (cached != matched).then_some(cached > matched)
            }
            Side::Right => {
                let cached = lcp_lr[mid].right;
                (cached != matched).then_some(cached < matched)
            }
        };

        if let Some(below) = decided {
            skips += 1;
            if below {
                left = mid + 1;
            } else {
                right = mid;
            }
            continue;
        }

        scans += 1;
        let start = array[mid];
        let mut idx = matched;
        while idx < m && start + idx < n && text[start + idx] == pattern[idx] {
            idx += 1;
        }

        let order = if idx == m {
            // Pattern exhausted: the suffix starts with it.
            Ordering::Greater
        } else if start + idx == n {
            // Suffix exhausted first: it is a proper prefix of the pattern.
            Ordering::Less
        } else {
            text[start + idx].cmp(&pattern[idx])
        };

        matched = idx;
        if order == Ordering::Less {
            left = mid + 1;
            side = Side::Left;
        } else {
            right = mid;
            side = Side::Right;
        }
    }

    LowerBound {
        slot: left,
        matched,
        scans,
        skips,
    }
}
