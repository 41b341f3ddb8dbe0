//! Search properties that do not need an oracle.

use super::oracles::{small_alphabet_text, text_and_pattern};
use proptest::prelude::*;
use sufarray::{Engine, PrefixDoublingSuffixArray, SymbolIndex, Symbols};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Soundness: every reported position starts an occurrence.
    #[test]
    fn prop_every_result_is_a_match((text, pattern) in text_and_pattern(64)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        for pos in index.find_all(&pattern) {
            prop_assert!(pos + pattern.len() <= text.len());
            prop_assert_eq!(&text[pos..pos + pattern.len()], pattern.as_slice());
        }
    }

    /// Results occupy consecutive suffix-array slots, in slot order.
    #[test]
    fn prop_results_are_a_slot_run((text, pattern) in text_and_pattern(64)) {
        prop_assume!(!pattern.is_empty());
        let index = PrefixDoublingSuffixArray::new(&text);
        let slots: Vec<usize> = index.find_all(&pattern).map(|pos| index.inverse()[pos]).collect();
        for pair in slots.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
    }

    /// No position is reported twice.
    #[test]
    fn prop_no_duplicates((text, pattern) in text_and_pattern(64)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let found = index.find_all(&pattern).into_sorted();
        let mut deduped = found.clone();
        deduped.dedup();
        prop_assert_eq!(found, deduped);
    }

    /// `count` and `contains` agree with iteration.
    #[test]
    fn prop_count_matches_iteration((text, pattern) in text_and_pattern(64)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let n = index.find_all(&pattern).count();
        prop_assert_eq!(index.count(&pattern), n);
        prop_assert_eq!(index.contains(&pattern), n > 0);
    }

    /// Searching twice gives the same answer.
    #[test]
    fn prop_find_all_idempotent((text, pattern) in text_and_pattern(64)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let first: Vec<usize> = index.find_all(&pattern).collect();
        let second: Vec<usize> = index.find_all(&pattern).collect();
        prop_assert_eq!(first, second);
    }

    /// The empty pattern occurs at every offset, the end of the text included.
    #[test]
    fn prop_empty_pattern_everywhere(text in small_alphabet_text(64)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let found: Vec<usize> = index.find_all(&[]).collect();
        prop_assert_eq!(found.last().copied(), Some(text.len()));
        let mut sorted = found;
        sorted.sort_unstable();
        prop_assert_eq!(sorted, (0..=text.len()).collect::<Vec<_>>());
    }

    /// Every substring of the text is found at its own offset.
    #[test]
    fn prop_substrings_are_found(text in small_alphabet_text(64), start in 0usize..64, len in 1usize..8) {
        prop_assume!(!text.is_empty());
        let start = start % text.len();
        let end = (start + len).min(text.len());
        let index = PrefixDoublingSuffixArray::new(&text);
        prop_assert!(index.find_all(&text[start..end]).any(|pos| pos == start));
    }

    /// Text search through the run-time typed index matches the typed engine.
    #[test]
    fn prop_symbol_index_matches_typed_engine((text, pattern) in text_and_pattern(48)) {
        let text_str: String = text.iter().map(|&b| b as char).collect();
        let pattern_str: String = pattern.iter().map(|&b| b as char).collect();
        let symbols = Symbols::from_text(&text_str);
        let index = SymbolIndex::build(Engine::PrefixDoubling, &symbols);
        let found = index.find_all(&Symbols::from_text(&pattern_str)).unwrap().into_sorted();
        prop_assert_eq!(found, PrefixDoublingSuffixArray::new(&text).find_all(&pattern).into_sorted());
    }
}
