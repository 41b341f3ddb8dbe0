// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant violations and the report produced when none are found.

use crate::types::LcpBounds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Suffix array and text have different lengths.
    ArrayLength { array_len: usize, text_len: usize },
    /// A position is out of range or occurs in more than one slot.
    NotPermutation { slot: usize, position: usize },
    /// The suffix at `slot` sorts before the one at `slot - 1`.
    UnsortedSuffixArray { slot: usize },
    /// `array[inverse[position]] != position`.
    InverseMismatch { position: usize, slot: usize },
    /// LCP array is not `n + 1` long (or non-empty for an empty text).
    LcpLength { found: usize, expected: usize },
    /// A stored LCP value disagrees with direct comparison.
    LcpMismatch {
        slot: usize,
        found: usize,
        expected: usize,
    },
    /// A cached interval entry disagrees with direct comparison.
    LcpIntervalMismatch {
        slot: usize,
        found: LcpBounds,
        expected: LcpBounds,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::ArrayLength {
                array_len,
                text_len,
            } => {
                write!(f, "array.len() {} != text.len() {}", array_len, text_len)
            }
            InvariantError::NotPermutation { slot, position } => {
                write!(
                    f,
                    "position {} at slot {} is out of range or repeated",
                    position, slot
                )
            }
            InvariantError::UnsortedSuffixArray { slot } => {
                write!(f, "suffix array not sorted at slot {}", slot)
            }
            InvariantError::InverseMismatch { position, slot } => {
                write!(
                    f,
                    "inverse[{}] = {} but array[{}] != {}",
                    position, slot, slot, position
                )
            }
            InvariantError::LcpLength { found, expected } => {
                write!(f, "lcp.len() {} (expected {})", found, expected)
            }
            InvariantError::LcpMismatch {
                slot,
                found,
                expected,
            } => {
                write!(
                    f,
                    "lcp at slot {} is {} (expected {})",
                    slot, found, expected
                )
            }
            InvariantError::LcpIntervalMismatch {
                slot,
                found,
                expected,
            } => {
                write!(
                    f,
                    "lcp_lr at slot {} is ({}, {}) (expected ({}, {}))",
                    slot, found.left, found.right, expected.left, expected.right
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Summary of a successful verification pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Number of indexed symbols.
    pub text_len: usize,
    /// Doubling rounds the construction needed (0 for the brute-force engine).
    pub rounds: usize,
    /// Longest repeated substring length, the largest LCP value.
    pub max_lcp: usize,
    /// Names of the checks that passed, in the order they ran.
    pub checks: Vec<String>,
}

impl VerificationReport {
    pub(crate) fn new(text_len: usize) -> Self {
        VerificationReport {
            text_len,
            rounds: 0,
            max_lcp: 0,
            checks: Vec::new(),
        }
    }

    pub(crate) fn passed(&mut self, check: &str) {
        self.checks.push(check.to_string());
    }
}
