// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for JSON symbol input.
//!
//! Arbitrary bytes that parse as JSON go through the symbol loader. Anything
//! it accepts must be indexable and searchable with a prefix of itself.
//! Anything it rejects must come back as an invalid-input error.

#![no_main]

use libfuzzer_sys::fuzz_target;
use sufarray::{Engine, SymbolIndex, Symbols};

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(&data[..data.len().min(4096)]) else {
        return;
    };

    let symbols = match Symbols::from_json(&value) {
        Ok(symbols) => symbols,
        Err(e) => {
            assert!(e.is_invalid_input(), "unexpected error kind: {}", e);
            return;
        }
    };

    let pattern = match &symbols {
        Symbols::Chars(chars) => Symbols::Chars(chars.iter().take(2).copied().collect()),
        Symbols::Integers(ints) => Symbols::Integers(ints.iter().take(2).copied().collect()),
        Symbols::Tokens(tokens) => Symbols::Tokens(tokens.iter().take(2).cloned().collect()),
    };

    for engine in Engine::ALL {
        let index = SymbolIndex::build(engine, &symbols);
        let hits = match index.find_all(&pattern) {
            Ok(matches) => matches.into_sorted(),
            Err(e) => panic!("same-kind pattern rejected: {}", e),
        };
        if !symbols.is_empty() {
            assert_eq!(hits.first(), Some(&0));
        }
    }
});
