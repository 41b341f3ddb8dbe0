// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the naive reference implementations every test compares
//! against, so each one is written exactly once.

#![doc(hidden)]

use crate::utils::{common_prefix_len, suffix_at};

/// Every offset where `pattern` occurs, by sliding a window over `text`.
///
/// The empty pattern occurs at every offset `0..=n`.
pub fn naive_occurrences<T: PartialEq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..=text.len()).collect();
    }
    if pattern.len() > text.len() {
        return Vec::new();
    }
    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| *window == pattern)
        .map(|(pos, _)| pos)
        .collect()
}

/// Suffix array by sorting suffix slices.
pub fn naive_suffix_array<T: Ord>(text: &[T]) -> Vec<usize> {
    let mut array: Vec<usize> = (0..text.len()).collect();
    array.sort_by(|&a, &b| suffix_at(text, a).cmp(suffix_at(text, b)));
    array
}

/// LCP array (`n + 1` long) by comparing neighbouring suffixes directly.
pub fn naive_lcp<T: Eq>(text: &[T], array: &[usize]) -> Vec<usize> {
    if array.is_empty() {
        return Vec::new();
    }
    let mut lcp = vec![0; array.len() + 1];
    for slot in 1..array.len() {
        lcp[slot] = common_prefix_len(
            suffix_at(text, array[slot - 1]),
            suffix_at(text, array[slot]),
        );
    }
    lcp
}

/// Pick a pattern that certainly occurs in `text`: `len` symbols from `start`
/// (both reduced into range). Empty when `text` is.
pub fn substring_of<T: Clone>(text: &[T], start: usize, len: usize) -> Vec<T> {
    if text.is_empty() {
        return Vec::new();
    }
    let start = start % text.len();
    let len = 1 + len % (text.len() - start);
    text[start..start + len].to_vec()
}
