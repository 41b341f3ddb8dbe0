// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts checked at the end of construction.
//!
//! Every function here panics in debug builds when its invariant does not
//! hold and returns immediately in release builds. The error-returning
//! equivalents live in the parent module.
//!
//! | Contract                      | Property                                  |
//! |-------------------------------|-------------------------------------------|
//! | `check_permutation`           | array is a permutation of `0..n`          |
//! | `check_inverse`               | `array[inverse[p]] == p`                  |
//! | `check_suffix_array_sorted`   | adjacent suffixes non-decreasing          |
//! | `check_lcp_correct`           | `lcp[i]` = LCP of slots `i - 1` and `i`   |
//! | `check_names_injective`       | final rank names are pairwise distinct    |
//! | `check_rounds_bound`          | at most ⌈log₂ n⌉ doubling rounds          |
//!
//! Texts longer than [`EXHAUSTIVE_LIMIT`] get the two suffix-comparing
//! contracts on a [`WINDOW`]-symbol prefix of each suffix only. Full
//! comparisons cost O(n²) on periodic text and would make debug builds of
//! large inputs unusable; `verify_index` remains the exhaustive check.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! Search correctness rests on all of these. A suffix array that is merely
//! "almost sorted" returns wrong answers silently.

use crate::utils::{common_prefix_len, window_at};

/// Largest text whose suffixes are compared in full.
pub const EXHAUSTIVE_LIMIT: usize = 1 << 12;

/// Symbols compared per suffix above [`EXHAUSTIVE_LIMIT`].
pub const WINDOW: usize = 64;

/// How much of each suffix the comparing contracts look at.
fn compared_len(n: usize) -> usize {
    if n <= EXHAUSTIVE_LIMIT {
        n
    } else {
        WINDOW
    }
}

/// Check that `array` holds every position in `0..array.len()` exactly once.
#[inline]
pub fn check_permutation(array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let mut seen = vec![false; array.len()];
    for (slot, &pos) in array.iter().enumerate() {
        debug_assert!(
            pos < array.len(),
            "Contract violation: Permutation - array[{}] = {} out of range (n = {})",
            slot,
            pos,
            array.len()
        );
        if pos < array.len() {
            debug_assert!(
                !seen[pos],
                "Contract violation: Permutation - position {} appears twice (slot {})",
                pos,
                slot
            );
            seen[pos] = true;
        }
    }
}

/// Check that `inverse` undoes `array`.
#[inline]
pub fn check_inverse(array: &[usize], inverse: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }
    debug_assert_eq!(
        array.len(),
        inverse.len(),
        "Contract violation: Inverse - lengths differ"
    );
    for (pos, &slot) in inverse.iter().enumerate() {
        debug_assert!(
            array.get(slot) == Some(&pos),
            "Contract violation: Inverse - array[inverse[{}]] != {}",
            pos,
            pos
        );
    }
}

/// Check that suffixes appear in non-decreasing order.
///
/// Above [`EXHAUSTIVE_LIMIT`] only the first [`WINDOW`] symbols of each
/// suffix are ordered.
///
/// # Panics (debug builds only)
/// Panics at the first adjacent pair out of order.
#[inline]
pub fn check_suffix_array_sorted<T: Ord>(text: &[T], array: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let len = compared_len(text.len());
    for slot in 1..array.len() {
        let prev = window_at(text, array[slot - 1], len);
        let curr = window_at(text, array[slot], len);
        debug_assert!(
            prev <= curr,
            "Contract violation: Sorted - slot {} (pos {}) sorts after slot {} (pos {})",
            slot - 1,
            array[slot - 1],
            slot,
            array[slot]
        );
    }
}

/// Check every LCP entry against a direct comparison.
///
/// `lcp` must have length `n + 1` with zero at both ends, or be empty when
/// the text is. Above [`EXHAUSTIVE_LIMIT`] an entry is only required to be
/// at least [`WINDOW`] when the two suffixes agree on that many symbols.
#[inline]
pub fn check_lcp_correct<T: Eq>(text: &[T], array: &[usize], lcp: &[usize]) {
    if !cfg!(debug_assertions) {
        return;
    }
    let n = array.len();
    let expected_len = if n == 0 { 0 } else { n + 1 };
    debug_assert_eq!(
        lcp.len(),
        expected_len,
        "Contract violation: LcpCorrect - lcp.len() {} (expected {})",
        lcp.len(),
        expected_len
    );
    if n == 0 || lcp.len() != n + 1 {
        return;
    }

    debug_assert_eq!(lcp[0], 0, "Contract violation: LcpCorrect - lcp[0] != 0");
    debug_assert_eq!(lcp[n], 0, "Contract violation: LcpCorrect - lcp[n] != 0");

    let len = compared_len(n);
    for slot in 1..n {
        let expected = common_prefix_len(
            window_at(text, array[slot - 1], len),
            window_at(text, array[slot], len),
        );
        let ok = if expected < len {
            lcp[slot] == expected
        } else {
            lcp[slot] >= expected
        };
        debug_assert!(
            ok,
            "Contract violation: LcpCorrect - lcp[{}] = {} (expected {})",
            slot,
            lcp[slot],
            expected
        );
    }
}

/// Check that rank names are pairwise distinct.
///
/// The doubling loop may stop early at a fixed point; this is what makes
/// that stop safe.
#[inline]
pub fn check_names_injective(names: &[usize]) {
    check_permutation(names);
}

/// Check that construction needed no more than ⌈log₂ n⌉ rounds.
#[inline]
pub fn check_rounds_bound(n: usize, rounds: usize) {
    let limit = ceil_log2(n);
    debug_assert!(
        rounds <= limit,
        "Contract violation: RoundsBound - {} rounds for n = {} (limit {})",
        rounds,
        n,
        limit
    );
}

/// ⌈log₂ n⌉, with 0 for `n <= 1`.
#[inline]
pub fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}
