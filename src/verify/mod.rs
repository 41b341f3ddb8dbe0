// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked verification** (`verify_*`) recomputes every stored structure
//!    the slow, obvious way and returns the first disagreement as an
//!    [`InvariantError`]. Always available; the CLI exposes it as `verify`.
//!
//! 2. **Runtime contracts** ([`contracts`]) that panic in debug builds when
//!    invariants are violated. Zero-cost in release, but catch bugs during
//!    development.
//!
//! Everything here is quadratic in the worst case. Use it on test and
//! diagnostic inputs, not on every build.

pub mod contracts;
mod types;

pub use types::*;

use crate::brute_force::BruteForceSuffixArray;
use crate::prefix_doubling::PrefixDoublingSuffixArray;
use crate::types::{LcpBounds, Symbol};
use crate::utils::{common_prefix_len, suffix_at};

/// Check that `array` is a permutation of `0..text.len()` in suffix order.
pub fn verify_suffix_array<T: Ord>(text: &[T], array: &[usize]) -> Result<(), InvariantError> {
    if array.len() != text.len() {
        return Err(InvariantError::ArrayLength {
            array_len: array.len(),
            text_len: text.len(),
        });
    }

    let mut seen = vec![false; array.len()];
    for (slot, &position) in array.iter().enumerate() {
        if position >= array.len() || seen[position] {
            return Err(InvariantError::NotPermutation { slot, position });
        }
        seen[position] = true;
    }

    for slot in 1..array.len() {
        if suffix_at(text, array[slot - 1]) > suffix_at(text, array[slot]) {
            return Err(InvariantError::UnsortedSuffixArray { slot });
        }
    }
    Ok(())
}

/// Check that `inverse` undoes `array`.
pub fn verify_inverse(array: &[usize], inverse: &[usize]) -> Result<(), InvariantError> {
    for (position, &slot) in inverse.iter().enumerate() {
        if array.get(slot) != Some(&position) {
            return Err(InvariantError::InverseMismatch { position, slot });
        }
    }
    if inverse.len() != array.len() {
        return Err(InvariantError::InverseMismatch {
            position: inverse.len(),
            slot: array.len(),
        });
    }
    Ok(())
}

/// Check the LCP array against direct comparison of neighbouring suffixes.
pub fn verify_lcp<T: Eq>(text: &[T], array: &[usize], lcp: &[usize]) -> Result<(), InvariantError> {
    let n = array.len();
    let expected_len = if n == 0 { 0 } else { n + 1 };
    if lcp.len() != expected_len {
        return Err(InvariantError::LcpLength {
            found: lcp.len(),
            expected: expected_len,
        });
    }

    for slot in 0..lcp.len() {
        let expected = if slot == 0 || slot == n {
            0
        } else {
            common_prefix_len(
                suffix_at(text, array[slot - 1]),
                suffix_at(text, array[slot]),
            )
        };
        if lcp[slot] != expected {
            return Err(InvariantError::LcpMismatch {
                slot,
                found: lcp[slot],
                expected,
            });
        }
    }
    Ok(())
}

/// Check every cached interval entry against the LCP of the suffixes at its
/// range boundaries.
///
/// Walks the same range tree the search does: root `(0, n)`, children
/// `(left, mid)` and `(mid + 1, right)`. A boundary outside `0..n` counts as
/// sharing nothing.
pub fn verify_lcp_intervals<T: Eq>(
    text: &[T],
    array: &[usize],
    lcp_lr: &[LcpBounds],
) -> Result<(), InvariantError> {
    let n = array.len();
    if lcp_lr.len() != n {
        return Err(InvariantError::LcpLength {
            found: lcp_lr.len(),
            expected: n,
        });
    }

    let lcp_between = |a: Option<usize>, b: usize| match a {
        Some(a) if a < n && b < n => {
            common_prefix_len(suffix_at(text, array[a]), suffix_at(text, array[b]))
        }
        _ => 0,
    };

    let mut ranges = if n == 0 { Vec::new() } else { vec![(0, n)] };
    while let Some((left, right)) = ranges.pop() {
        if right == left {
            continue;
        }
        let mid = (left + right) / 2;
        let expected = LcpBounds {
            left: lcp_between(left.checked_sub(1), mid),
            right: lcp_between(Some(right), mid),
        };
        if lcp_lr[mid] != expected {
            return Err(InvariantError::LcpIntervalMismatch {
                slot: mid,
                found: lcp_lr[mid],
                expected,
            });
        }
        if right > left + 1 {
            ranges.push((left, mid));
            ranges.push((mid + 1, right));
        }
    }
    Ok(())
}

/// Verify every structure a prefix-doubling index carries.
pub fn verify_index<T: Symbol>(
    index: &PrefixDoublingSuffixArray<'_, T>,
) -> Result<VerificationReport, InvariantError> {
    let text = index.text();
    let mut report = VerificationReport::new(text.len());
    report.rounds = index.rounds();

    verify_suffix_array(text, index.array())?;
    report.passed("suffix-array");
    verify_inverse(index.array(), index.inverse())?;
    report.passed("inverse");
    verify_lcp(text, index.array(), index.lcp())?;
    report.passed("lcp");
    verify_lcp_intervals(text, index.array(), index.lcp_lr())?;
    report.passed("lcp-intervals");

    report.max_lcp = index.lcp().iter().copied().max().unwrap_or(0);
    log::debug!("verified index over {} symbols", text.len());
    Ok(report)
}

/// Verify the brute-force engine's suffix array.
pub fn verify_brute_force<T: Symbol>(
    index: &BruteForceSuffixArray<'_, T>,
) -> Result<VerificationReport, InvariantError> {
    let text = index.text();
    let mut report = VerificationReport::new(text.len());
    verify_suffix_array(text, index.array())?;
    report.passed("suffix-array");

    report.max_lcp = index
        .array()
        .windows(2)
        .map(|w| common_prefix_len(suffix_at(text, w[0]), suffix_at(text, w[1])))
        .max()
        .unwrap_or(0);
    Ok(report)
}
