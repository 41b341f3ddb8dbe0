//! Reference oracles for differential testing.
//!
//! These are simple, obviously-correct implementations. They serve as ground
//! truth for the optimized engines: if an engine and an oracle disagree, the
//! oracle is right.

use proptest::prelude::*;

// =============================================================================
// ORACLE IMPLEMENTATIONS
// =============================================================================

/// O(n² log n) suffix array: sort owned copies of every suffix.
pub fn oracle_suffix_array<T: Ord + Clone>(text: &[T]) -> Vec<usize> {
    let mut suffixes: Vec<(Vec<T>, usize)> = (0..text.len())
        .map(|pos| (text[pos..].to_vec(), pos))
        .collect();
    suffixes.sort();
    suffixes.into_iter().map(|(_, pos)| pos).collect()
}

/// LCP of the suffixes starting at `a` and `b`, by symbol-by-symbol walk.
pub fn oracle_lcp_between<T: Eq>(text: &[T], a: usize, b: usize) -> usize {
    let mut len = 0;
    while a + len < text.len() && b + len < text.len() && text[a + len] == text[b + len] {
        len += 1;
    }
    len
}

/// Every offset where `pattern` starts, by checking each offset.
pub fn oracle_find_all<T: Eq>(text: &[T], pattern: &[T]) -> Vec<usize> {
    (0..=text.len())
        .filter(|&pos| text.len() - pos >= pattern.len() && text[pos..pos + pattern.len()] == *pattern)
        .collect()
}

/// Interval cache by the recursive definition over the binary-search tree.
pub fn oracle_lcp_lr<T: Eq>(text: &[T], array: &[usize]) -> Vec<(usize, usize)> {
    fn fill<T: Eq>(
        text: &[T],
        array: &[usize],
        out: &mut [(usize, usize)],
        left: usize,
        right: usize,
    ) {
        if right == left {
            return;
        }
        let n = array.len();
        let mid = (left + right) / 2;
        let to_left = if left == 0 {
            0
        } else {
            oracle_lcp_between(text, array[left - 1], array[mid])
        };
        let to_right = if right >= n {
            0
        } else {
            oracle_lcp_between(text, array[mid], array[right])
        };
        out[mid] = (to_left, to_right);
        if right > left + 1 {
            fill(text, array, out, left, mid);
            fill(text, array, out, mid + 1, right);
        }
    }

    let mut out = vec![(0, 0); array.len()];
    fill(text, array, &mut out, 0, array.len());
    out
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Byte texts over a small alphabet, so repeats are common.
pub fn small_alphabet_text(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![&b"a"[..], b"ab", b"abc", b"acgt"]).prop_flat_map(move |alphabet| {
        prop::collection::vec(prop::sample::select(alphabet.to_vec()), 0..=max_len)
    })
}

/// Integer texts with a handful of distinct values, negatives included.
pub fn small_integer_text(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-2i64..=2, 0..=max_len)
}

/// A text together with a pattern that is sometimes a substring of it.
pub fn text_and_pattern(max_len: usize) -> impl Strategy<Value = (Vec<u8>, Vec<u8>)> {
    small_alphabet_text(max_len).prop_flat_map(|text| {
        let n = text.len();
        let random = prop::collection::vec(prop::sample::select(b"abcx".to_vec()), 0..6);
        let cut = if n == 0 {
            Just(Vec::new()).boxed()
        } else {
            (0..n, 1..=n)
                .prop_map({
                    let text = text.clone();
                    move |(start, len)| {
                        let end = (start + len).min(text.len());
                        text[start..end].to_vec()
                    }
                })
                .boxed()
        };
        (Just(text), prop_oneof![random, cut])
    })
}

// =============================================================================
// ORACLE SELF-CHECKS
// =============================================================================

#[test]
fn oracle_banana() {
    assert_eq!(oracle_suffix_array(b"banana"), vec![5, 3, 1, 0, 4, 2]);
    assert_eq!(oracle_find_all(b"banana", b"ana"), vec![1, 3]);
    assert_eq!(oracle_find_all(b"ab", b""), vec![0, 1, 2]);
    assert_eq!(
        oracle_lcp_lr(b"banana", &[5, 3, 1, 0, 4, 2]),
        vec![(0, 1), (0, 0), (3, 0), (0, 0), (0, 2), (0, 0)]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Each oracle occurrence really is an occurrence.
    #[test]
    fn oracle_find_all_is_sound((text, pattern) in text_and_pattern(40)) {
        for pos in oracle_find_all(&text, &pattern) {
            prop_assert_eq!(&text[pos..pos + pattern.len()], pattern.as_slice());
        }
    }

    /// The oracle suffix array is a permutation.
    #[test]
    fn oracle_suffix_array_is_permutation(text in small_alphabet_text(40)) {
        let mut array = oracle_suffix_array(&text);
        array.sort_unstable();
        prop_assert_eq!(array, (0..text.len()).collect::<Vec<_>>());
    }
}
