// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Suffix arrays over arbitrary ordered symbols, with substring search.
//!
//! Two engines build the same suffix array:
//!
//! - [`BruteForceSuffixArray`]: sorts suffix slices directly. Slow, obviously
//!   correct, used as the oracle.
//! - [`PrefixDoublingSuffixArray`]: prefix doubling with counting sorts,
//!   Kasai LCP array, and an LCP-interval cache that lets `find_all` skip
//!   most symbol comparisons.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌───────────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  brute_force.rs   │────▶│  matches.rs  │
//! │  (Symbol,   │     │  prefix_doubling/ │     │  (Matches)   │
//! │   Engine)   │     │  naming/lcp/search│     │              │
//! └─────────────┘     └───────────────────┘     └──────────────┘
//!        │                     │                       │
//!        ▼                     ▼                       ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  index.rs (SuffixIndex, build_index)   symbols.rs (JSON)  │
//! │  verify/ (verify_*, contracts)         error.rs           │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sufarray::PrefixDoublingSuffixArray;
//!
//! let text = b"mississippi";
//! let sa = PrefixDoublingSuffixArray::new(text);
//! let mut found: Vec<usize> = sa.find_all(b"issi").collect();
//! found.sort();
//! assert_eq!(found, vec![1, 4]);
//! ```
//!
//! Occurrences come back in suffix-array order; sort them (or call
//! [`Matches::into_sorted`]) when text order matters.

mod brute_force;
mod error;
mod index;
mod matches;
mod prefix_doubling;
mod symbols;
mod types;
mod utils;
pub mod verify;

#[doc(hidden)]
pub mod testing;

pub use brute_force::BruteForceSuffixArray;
pub use error::SuffixArrayError;
pub use index::{build_index, SuffixIndex};
pub use matches::Matches;
pub use prefix_doubling::PrefixDoublingSuffixArray;
pub use symbols::{SymbolIndex, SymbolKind, Symbols};
pub use types::{Engine, LcpBounds, Symbol};
pub use utils::{common_prefix_len, suffix_at};
pub use verify::{
    verify_brute_force, verify_index, verify_inverse, verify_lcp, verify_lcp_intervals,
    verify_suffix_array, InvariantError, VerificationReport,
};
