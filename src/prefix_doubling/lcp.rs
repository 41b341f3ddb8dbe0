// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! LCP array and the LCP-interval cache consulted by the search.
//!
//! # LCP array
//!
//! `lcp[slot]` is the common prefix length of the suffixes at `slot - 1` and
//! `slot`. Slots 0 and `n` have no predecessor/successor and hold 0; the
//! extra slot at `n` lets the interval cache treat "past the last suffix"
//! like any other boundary.
//!
//! Suffixes are visited in text order. Dropping the first symbol of a suffix
//! loses at most one symbol of agreement with its predecessor, so the running
//! match length shrinks by at most one per step and the whole pass is O(n).
//!
//! # Interval cache
//!
//! ```text
//! range (0, 6) ── mid 3 ──┬── (0, 3) ── mid 1 ──┬── (0, 1) ── mid 0
//!                         │                     └── (2, 3) ── mid 2
//!                         └── (4, 6) ── mid 5 ──┬── (4, 5) ── mid 4
//!                                               └── (6, 6)
//! ```
//!
//! Every slot is the midpoint of exactly one range of the binary search.
//! For that range `(left, right)`, `min(lcp[left..=mid])` is the LCP of the
//! suffixes at `left - 1` and `mid`, and `min(lcp[mid + 1..=right])` the LCP
//! of `mid` and `right`. Both are produced bottom-up in one post-order pass.

use crate::types::LcpBounds;

/// LCP array of length `n + 1` (empty for an empty text).
pub(crate) fn lcp_array<T: Eq>(text: &[T], array: &[usize], inverse: &[usize]) -> Vec<usize> {
    let n = text.len();
    if n == 0 {
        return Vec::new();
    }

    let mut lcp = vec![0usize; n + 1];
    let mut cur_lcp = 0usize;

    for suf_start in 0..n {
        let slot = inverse[suf_start];
        if slot == 0 {
            cur_lcp = 0;
            continue;
        }

        let prev_start = array[slot - 1];
        while suf_start + cur_lcp < n
            && prev_start + cur_lcp < n
            && text[suf_start + cur_lcp] == text[prev_start + cur_lcp]
        {
            cur_lcp += 1;
        }

        lcp[slot] = cur_lcp;
        cur_lcp = cur_lcp.saturating_sub(1);
    }

    lcp
}

enum Task {
    /// Descend into the search range `(left, right)`.
    Visit { left: usize, right: usize },
    /// Both halves of the range split at `mid` are done.
    Combine { mid: usize },
}

/// Cached boundary LCPs for every binary-search midpoint over `(0, n)`.
///
/// `lcp` must come from [`lcp_array`] (length `n + 1`).
pub(crate) fn lcp_intervals(lcp: &[usize]) -> Vec<LcpBounds> {
    let n = lcp.len().saturating_sub(1);
    let mut lcp_lr = vec![LcpBounds::default(); n];
    if n == 0 {
        return lcp_lr;
    }

    // Explicit stack in place of recursion; `mins` holds each finished
    // range's minimum LCP in completion order.
    let mut tasks = vec![Task::Visit { left: 0, right: n }];
    let mut mins: Vec<usize> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Visit { left, right } if right == left => {
                mins.push(lcp[left]);
            }
            Task::Visit { left, right } if right == left + 1 => {
                let bounds = LcpBounds {
                    left: lcp[left],
                    right: lcp[right],
                };
                lcp_lr[left] = bounds;
                mins.push(bounds.min());
            }
            Task::Visit { left, right } => {
                let mid = (left + right) / 2;
                tasks.push(Task::Combine { mid });
                tasks.push(Task::Visit {
                    left: mid + 1,
                    right,
                });
                tasks.push(Task::Visit { left, right: mid });
            }
            Task::Combine { mid } => {
                let right_min = mins.pop().unwrap_or(0);
                let left_min = mins.pop().unwrap_or(0);
                let bounds = LcpBounds {
                    left: left_min,
                    right: right_min,
                };
                lcp_lr[mid] = bounds;
                mins.push(bounds.min());
            }
        }
    }

    debug_assert_eq!(mins.len(), 1, "interval pass must leave only the root");
    lcp_lr
}
