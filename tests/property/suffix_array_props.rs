//! Structural properties of the prefix-doubling index.

use super::oracles::{
    oracle_lcp_between, oracle_lcp_lr, oracle_suffix_array, small_alphabet_text,
    small_integer_text,
};
use proptest::prelude::*;
use sufarray::{verify_index, BruteForceSuffixArray, PrefixDoublingSuffixArray};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// The suffix array is a permutation of 0..n.
    #[test]
    fn prop_array_is_permutation(text in small_alphabet_text(80)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let mut seen = index.array().to_vec();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..text.len()).collect::<Vec<_>>());
    }

    /// Adjacent suffixes are in non-decreasing order.
    #[test]
    fn prop_array_is_sorted(text in small_alphabet_text(80)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        for slot in 1..index.len() {
            let prev = &text[index.array()[slot - 1]..];
            let curr = &text[index.array()[slot]..];
            prop_assert!(prev <= curr, "slot {} out of order", slot);
        }
    }

    /// Same array as the oracle and as the brute-force engine.
    #[test]
    fn prop_array_matches_oracle(text in small_alphabet_text(80)) {
        let expected = oracle_suffix_array(&text);
        let index = PrefixDoublingSuffixArray::new(&text);
        let brute = BruteForceSuffixArray::new(&text);
        prop_assert_eq!(index.array(), expected.as_slice());
        prop_assert_eq!(brute.array(), expected.as_slice());
    }

    /// `inverse` undoes `array`, which also means the final names were
    /// pairwise distinct even when the doubling loop stopped early.
    #[test]
    fn prop_inverse_inverts(text in small_alphabet_text(80)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        for pos in 0..text.len() {
            prop_assert_eq!(index.array()[index.inverse()[pos]], pos);
        }
        for slot in 0..text.len() {
            prop_assert_eq!(index.inverse()[index.array()[slot]], slot);
        }
    }

    /// Every LCP entry equals the directly measured common prefix.
    #[test]
    fn prop_lcp_correct(text in small_alphabet_text(80)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let n = text.len();
        if n == 0 {
            prop_assert!(index.lcp().is_empty());
        } else {
            prop_assert_eq!(index.lcp().len(), n + 1);
            prop_assert_eq!(index.lcp()[0], 0);
            prop_assert_eq!(index.lcp()[n], 0);
            for slot in 1..n {
                let expected =
                    oracle_lcp_between(&text, index.array()[slot - 1], index.array()[slot]);
                prop_assert_eq!(index.lcp()[slot], expected, "slot {}", slot);
            }
        }
    }

    /// Every cached interval entry matches the recursive definition.
    #[test]
    fn prop_lcp_lr_correct(text in small_alphabet_text(80)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let expected = oracle_lcp_lr(&text, index.array());
        let actual: Vec<(usize, usize)> =
            index.lcp_lr().iter().map(|b| (b.left, b.right)).collect();
        prop_assert_eq!(actual, expected);
    }

    /// At most ⌈log₂ n⌉ doubling rounds.
    #[test]
    fn prop_rounds_logarithmic(text in small_alphabet_text(200)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let n = text.len();
        let limit = if n <= 1 { 0 } else { (usize::BITS - (n - 1).leading_zeros()) as usize };
        prop_assert!(index.rounds() <= limit, "{} rounds for n = {}", index.rounds(), n);
    }

    /// Building twice gives identical structures.
    #[test]
    fn prop_construction_deterministic(text in small_alphabet_text(60)) {
        let a = PrefixDoublingSuffixArray::new(&text);
        let b = PrefixDoublingSuffixArray::new(&text);
        prop_assert_eq!(a.array(), b.array());
        prop_assert_eq!(a.lcp(), b.lcp());
        prop_assert_eq!(a.lcp_lr(), b.lcp_lr());
        prop_assert_eq!(a.rounds(), b.rounds());
    }

    /// The checked verifier accepts everything the engine builds.
    #[test]
    fn prop_verifier_accepts(text in small_alphabet_text(60)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        prop_assert!(verify_index(&index).is_ok());
    }

    /// Integer symbols behave like any other ordered type.
    #[test]
    fn prop_integer_array_matches_oracle(text in small_integer_text(60)) {
        let index = PrefixDoublingSuffixArray::new(&text);
        let expected = oracle_suffix_array(&text);
        prop_assert_eq!(index.array(), expected.as_slice());
    }
}
