// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type surfaced by construction, queries and verification.
//!
//! There is no partial failure: a build either returns a complete index or
//! one of these errors, and a query either returns a (possibly empty) match
//! set or one of these errors. Nothing here is retried internally.

use crate::verify::InvariantError;
use std::fmt;

/// Errors returned by the public API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuffixArrayError {
    /// Input whose shape or symbol type cannot be indexed or compared.
    ///
    /// `found` names the offending value's type, `detail` carries a short
    /// rendering of the value (and its position, when it sits in an array).
    InvalidInput {
        expected: String,
        found: String,
        detail: String,
    },
    /// A built structure failed an invariant check.
    Invariant(InvariantError),
}

impl SuffixArrayError {
    pub(crate) fn invalid_input(
        expected: impl Into<String>,
        found: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        SuffixArrayError::InvalidInput {
            expected: expected.into(),
            found: found.into(),
            detail: detail.into(),
        }
    }

    /// True for [`SuffixArrayError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, SuffixArrayError::InvalidInput { .. })
    }
}

impl fmt::Display for SuffixArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuffixArrayError::InvalidInput {
                expected,
                found,
                detail,
            } => {
                write!(
                    f,
                    "invalid input: expected {}, found {} ({})",
                    expected, found, detail
                )
            }
            SuffixArrayError::Invariant(err) => write!(f, "invariant violated: {}", err),
        }
    }
}

impl std::error::Error for SuffixArrayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SuffixArrayError::Invariant(err) => Some(err),
            SuffixArrayError::InvalidInput { .. } => None,
        }
    }
}

impl From<InvariantError> for SuffixArrayError {
    fn from(err: InvariantError) -> Self {
        SuffixArrayError::Invariant(err)
    }
}
