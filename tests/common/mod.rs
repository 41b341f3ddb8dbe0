//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sufarray::{build_index, Engine, PrefixDoublingSuffixArray, SuffixIndex};

// Re-export canonical test utilities from sufarray::testing
pub use sufarray::testing::{naive_lcp, naive_occurrences, naive_suffix_array, substring_of};

// ============================================================================
// FIXTURES
// ============================================================================

/// `(text, pattern, occurrences in text order)` for hand-checked cases.
pub const SCENARIOS: &[(&str, &str, &[usize])] = &[
    ("banana", "ana", &[1, 3]),
    ("aaaaa", "aa", &[0, 1, 2, 3]),
    ("", "a", &[]),
    ("abcabcabc", "xyz", &[]),
    ("mississippi", "issi", &[1, 4]),
    ("abc", "", &[0, 1, 2, 3]),
    ("", "", &[0]),
    ("abracadabra", "abra", &[0, 7]),
    ("abracadabra", "a", &[0, 3, 5, 7, 10]),
    ("abab", "abab", &[0]),
    ("abab", "ababa", &[]),
];

/// Texts that stress ties: unary runs, periodic strings, and a Fibonacci word.
pub fn repetitive_texts() -> Vec<String> {
    let mut fib = (String::from("a"), String::from("ab"));
    for _ in 0..8 {
        let next = format!("{}{}", fib.1, fib.0);
        fib = (fib.1, next);
    }
    vec![
        "a".repeat(64),
        "ab".repeat(33),
        "abc".repeat(21),
        "aab".repeat(20),
        fib.1,
    ]
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Positions found by `engine`, sorted.
pub fn find_sorted<T: sufarray::Symbol>(engine: Engine, text: &[T], pattern: &[T]) -> Vec<usize> {
    build_index(engine, text).positions_sorted(pattern)
}

/// Assert both engines agree with naive scanning for `pattern`.
pub fn assert_engines_match_naive(text: &[u8], pattern: &[u8]) {
    let expected = naive_occurrences(text, pattern);
    for engine in Engine::ALL {
        assert_eq!(
            find_sorted(engine, text, pattern),
            expected,
            "{} disagrees with naive scan: text {:?}, pattern {:?}",
            engine,
            String::from_utf8_lossy(text),
            String::from_utf8_lossy(pattern)
        );
    }
}

/// Assert every structure of a prefix-doubling index against naive rebuilds.
pub fn assert_index_well_formed<T: sufarray::Symbol + std::fmt::Debug>(text: &[T]) {
    let index = PrefixDoublingSuffixArray::new(text);
    let array = naive_suffix_array(text);
    assert_eq!(index.array(), array.as_slice(), "suffix array of {:?}", text);
    assert_eq!(index.lcp(), naive_lcp(text, &array).as_slice(), "lcp of {:?}", text);
    if let Err(err) = sufarray::verify_index(&index) {
        panic!("index over {:?} failed verification: {}", text, err);
    }
}
