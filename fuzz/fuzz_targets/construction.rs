// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index construction.
//!
//! Every index the doubling engine builds must pass the checked verifier,
//! agree with the brute-force array, and stay within the round bound.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sufarray::verify::contracts::ceil_log2;
use sufarray::{verify_index, BruteForceSuffixArray, PrefixDoublingSuffixArray};

fuzz_target!(|data: &[u8]| {
    let text = &data[..data.len().min(2048)];

    let index = PrefixDoublingSuffixArray::new(text);
    let brute = BruteForceSuffixArray::new(text);

    assert_eq!(index.array(), brute.array());
    assert!(index.rounds() <= ceil_log2(text.len()));

    if let Err(e) = verify_index(&index) {
        panic!("verifier rejected {:?}: {}", text, e);
    }
});
