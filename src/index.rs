// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine-agnostic access to a built suffix array.
//!
//! Callers that pick the engine at run time (the CLI, the differential
//! tests) go through [`build_index`] and the [`SuffixIndex`] trait instead of
//! naming a concrete type.

use crate::brute_force::BruteForceSuffixArray;
use crate::matches::Matches;
use crate::prefix_doubling::PrefixDoublingSuffixArray;
use crate::types::{Engine, Symbol};

/// A suffix array over a borrowed text, whichever engine built it.
pub trait SuffixIndex<T> {
    /// The engine that built this index.
    fn engine(&self) -> Engine;

    /// The indexed text.
    fn text(&self) -> &[T];

    /// Text positions in suffix order.
    fn array(&self) -> &[usize];

    /// Occurrences of `pattern` in suffix-array order.
    fn find_all(&self, pattern: &[T]) -> Matches<'_>;

    fn len(&self) -> usize {
        self.array().len()
    }

    fn is_empty(&self) -> bool {
        self.array().is_empty()
    }

    fn count(&self, pattern: &[T]) -> usize {
        self.find_all(pattern).count()
    }

    fn contains(&self, pattern: &[T]) -> bool {
        self.find_all(pattern).next().is_some()
    }

    /// Occurrences of `pattern` in ascending text order.
    fn positions_sorted(&self, pattern: &[T]) -> Vec<usize> {
        self.find_all(pattern).into_sorted()
    }
}

impl<T: Symbol> SuffixIndex<T> for BruteForceSuffixArray<'_, T> {
    fn engine(&self) -> Engine {
        Engine::BruteForce
    }

    fn text(&self) -> &[T] {
        BruteForceSuffixArray::text(self)
    }

    fn array(&self) -> &[usize] {
        BruteForceSuffixArray::array(self)
    }

    fn find_all(&self, pattern: &[T]) -> Matches<'_> {
        BruteForceSuffixArray::find_all(self, pattern)
    }
}

impl<T: Symbol> SuffixIndex<T> for PrefixDoublingSuffixArray<'_, T> {
    fn engine(&self) -> Engine {
        Engine::PrefixDoubling
    }

    fn text(&self) -> &[T] {
        PrefixDoublingSuffixArray::text(self)
    }

    fn array(&self) -> &[usize] {
        PrefixDoublingSuffixArray::array(self)
    }

    fn find_all(&self, pattern: &[T]) -> Matches<'_> {
        PrefixDoublingSuffixArray::find_all(self, pattern)
    }
}

/// Build a suffix array over `text` with the chosen engine.
pub fn build_index<'a, T: Symbol>(engine: Engine, text: &'a [T]) -> Box<dyn SuffixIndex<T> + 'a> {
    match engine {
        Engine::BruteForce => Box::new(BruteForceSuffixArray::new(text)),
        Engine::PrefixDoubling => Box::new(PrefixDoublingSuffixArray::new(text)),
    }
}
