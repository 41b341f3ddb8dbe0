//! Hand-checked search scenarios, run against both engines.

use crate::common::{assert_engines_match_naive, find_sorted, SCENARIOS};
use sufarray::{BruteForceSuffixArray, Engine, PrefixDoublingSuffixArray};

#[test]
fn test_every_scenario_on_every_engine() {
    for &(text, pattern, expected) in SCENARIOS {
        for engine in Engine::ALL {
            assert_eq!(
                find_sorted(engine, text.as_bytes(), pattern.as_bytes()),
                expected,
                "{}: {:?} in {:?}",
                engine,
                pattern,
                text
            );
        }
    }
}

#[test]
fn test_scenarios_agree_with_naive_scan() {
    for &(text, pattern, _) in SCENARIOS {
        assert_engines_match_naive(text.as_bytes(), pattern.as_bytes());
    }
}

#[test]
fn test_banana_structures() {
    let index = PrefixDoublingSuffixArray::new(b"banana");
    assert_eq!(index.array(), &[5, 3, 1, 0, 4, 2]);
    assert_eq!(index.inverse(), &[3, 2, 5, 1, 4, 0]);
    assert_eq!(index.lcp(), &[0, 1, 3, 0, 0, 2, 0]);

    let oracle = BruteForceSuffixArray::new(b"banana");
    assert_eq!(oracle.array(), index.array());
}

#[test]
fn test_mississippi_structures() {
    let index = PrefixDoublingSuffixArray::new(b"mississippi");
    // i, ippi, issippi, ississippi, mississippi, pi, ppi, sippi, sissippi,
    // ssippi, ssissippi
    assert_eq!(index.array(), &[10, 7, 4, 1, 0, 9, 8, 6, 3, 5, 2]);
    assert_eq!(index.lcp(), &[0, 1, 1, 4, 0, 0, 1, 0, 2, 1, 3, 0]);
}

#[test]
fn test_occurrences_come_in_slot_order() {
    let index = PrefixDoublingSuffixArray::new(b"banana");
    let found: Vec<usize> = index.find_all(b"a").collect();
    // "a" (5), "ana" (3), "anana" (1)
    assert_eq!(found, vec![5, 3, 1]);

    let oracle = BruteForceSuffixArray::new(b"banana");
    let found: Vec<usize> = oracle.find_all(b"a").collect();
    assert_eq!(found, vec![5, 3, 1]);
}

#[test]
fn test_count_and_contains() {
    let index = PrefixDoublingSuffixArray::new(b"mississippi");
    assert_eq!(index.count(b"ss"), 2);
    assert_eq!(index.count(b"i"), 4);
    assert!(index.contains(b"sip"));
    assert!(!index.contains(b"spi"));
}

#[test]
fn test_word_tokens() {
    let text: Vec<&str> = "to be or not to be".split(' ').collect();
    for engine in Engine::ALL {
        assert_eq!(find_sorted(engine, &text, &["to", "be"]), vec![0, 4]);
        assert_eq!(find_sorted(engine, &text, &["be"]), vec![1, 5]);
        assert_eq!(find_sorted(engine, &text, &["be", "to"]), Vec::<usize>::new());
    }
}
