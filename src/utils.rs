// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Small slice helpers shared by both engines and the verification layer.

/// The suffix of `text` starting at `pos` (empty past the end).
#[inline]
pub fn suffix_at<T>(text: &[T], pos: usize) -> &[T] {
    text.get(pos..).unwrap_or(&[])
}

/// At most `len` symbols of the suffix at `pos`.
#[inline]
pub fn window_at<T>(text: &[T], pos: usize, len: usize) -> &[T] {
    let suffix = suffix_at(text, pos);
    &suffix[..len.min(suffix.len())]
}

/// Length of the longest common prefix of two slices.
#[inline]
pub fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
