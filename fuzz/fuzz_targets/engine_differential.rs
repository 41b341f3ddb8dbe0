// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target comparing both engines' search against a linear scan.
//!
//! The text alphabet is folded down to four symbols so long repeats and
//! shared prefixes show up often. That is where the interval cache earns
//! its keep, and where an off-by-one in the skip logic would hide.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sufarray::{BruteForceSuffixArray, PrefixDoublingSuffixArray};

#[derive(Debug, Arbitrary)]
struct SearchInput {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fn fold(bytes: &[u8], cap: usize) -> Vec<u8> {
    bytes.iter().take(cap).map(|b| b'a' + b % 4).collect()
}

fuzz_target!(|input: SearchInput| {
    let text = fold(&input.text, 512);
    let pattern = fold(&input.pattern, 16);

    let expected: Vec<usize> = (0..=text.len())
        .filter(|&pos| text[pos..].starts_with(&pattern))
        .collect();

    let doubling = PrefixDoublingSuffixArray::new(&text);
    let brute = BruteForceSuffixArray::new(&text);

    let doubling_hits: Vec<usize> = doubling.find_all(&pattern).collect();
    let brute_hits: Vec<usize> = brute.find_all(&pattern).collect();

    // Same slot order from both engines
    assert_eq!(doubling_hits, brute_hits);

    let mut sorted = doubling_hits;
    sorted.sort_unstable();
    assert_eq!(sorted, expected, "pattern {:?} in {:?}", pattern, text);
});
