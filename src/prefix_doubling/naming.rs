// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank naming by prefix doubling.
//!
//! ```text
//! text = "banana"            pos:   0  1  2  3  4  5
//!
//! initial names (1 symbol)          1  0  2  0  2  0     a < b < n
//! cur_len = 1, key = (name, next)  (1,1)(0,3)(2,1)(0,3)(2,1)(0,0)
//! renamed (2 symbols)               2  1  3  1  3  0     "a$" < "an" < "ba" < "na"
//! cur_len = 2, key = (name, next)  (2,4)(1,2)(3,4)(1,1)(3,0)(0,0)
//! renamed (4 symbols)               3  2  5  1  4  0     all distinct: stop
//! ```
//!
//! `next` is the name `cur_len` positions further on, shifted up by one so
//! that 0 means "the window runs off the end of the text". A missing
//! continuation therefore sorts before every present one.
//!
//! Names are dense (`0..classes`), so each round reorders positions with two
//! stable counting-sort passes (second key, then first key) in O(n). At most
//! ⌈log₂ n⌉ rounds run, giving O(n log n) overall.

/// Final ranking of every text position.
#[derive(Debug, Clone)]
pub(crate) struct Ranking {
    /// `names[pos]` = rank of the suffix at `pos` (the inverse suffix array).
    pub names: Vec<usize>,
    /// Number of doubling rounds that ran.
    pub rounds: usize,
}

/// Name every suffix of `text` by its rank.
pub(crate) fn rank_suffixes<T: Ord>(text: &[T]) -> Ranking {
    let n = text.len();
    if n == 0 {
        return Ranking {
            names: Vec::new(),
            rounds: 0,
        };
    }

    let (mut names, mut classes) = initial_names(text);
    log::debug!("prefix doubling: {} symbols, {} distinct", n, classes);

    let mut cur_len = 1usize;
    let mut rounds = 0usize;

    // INVARIANT: names[a] == names[b] <=> text[a..a+cur_len] == text[b..b+cur_len]
    // (windows truncated at the end of the text).
    while cur_len < n && classes < n {
        let (refined, refined_classes) = refine(&names, classes, cur_len);
        rounds += 1;
        log::trace!(
            "round {}: cur_len {} -> {}, {} classes",
            rounds,
            cur_len,
            cur_len * 2,
            refined_classes
        );

        // Refinement only ever splits classes, so an unchanged class count
        // means an unchanged name array.
        let unchanged = refined_classes == classes;
        names = refined;
        classes = refined_classes;
        cur_len *= 2;
        if unchanged {
            break;
        }
    }

    log::debug!(
        "prefix doubling finished after {} rounds ({} classes)",
        rounds,
        classes
    );
    Ranking { names, rounds }
}

/// Dense names from single symbols: equal symbols share a name.
fn initial_names<T: Ord>(text: &[T]) -> (Vec<usize>, usize) {
    let n = text.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| text[a].cmp(&text[b]));

    let mut names = vec![0usize; n];
    let mut class = 0usize;
    for i in 1..n {
        if text[order[i]] != text[order[i - 1]] {
            class += 1;
        }
        names[order[i]] = class;
    }
    (names, class + 1)
}

/// One doubling round: rename by `(names[pos], names[pos + cur_len])`.
fn refine(names: &[usize], classes: usize, cur_len: usize) -> (Vec<usize>, usize) {
    let n = names.len();
    let next = |pos: usize| {
        if pos + cur_len < n {
            names[pos + cur_len] + 1
        } else {
            0
        }
    };
    let key = |pos: usize| (names[pos], next(pos));

    // LSD radix sort: stable pass on the second key, then on the first.
    let positions: Vec<usize> = (0..n).collect();
    let by_next = counting_sort(&positions, classes + 1, next);
    let order = counting_sort(&by_next, classes, |pos| names[pos]);

    let mut refined = vec![0usize; n];
    let mut class = 0usize;
    for i in 1..n {
        if key(order[i]) != key(order[i - 1]) {
            class += 1;
        }
        refined[order[i]] = class;
    }
    (refined, class + 1)
}

/// Stable counting sort of `items` by `key`, where `key(item) < buckets`.
fn counting_sort(items: &[usize], buckets: usize, key: impl Fn(usize) -> usize) -> Vec<usize> {
    let mut heads = bucket_heads(&bucket_sizes(items, buckets, &key));
    let mut sorted = vec![0usize; items.len()];
    for &item in items {
        let bucket = key(item);
        sorted[heads[bucket]] = item;
        heads[bucket] += 1;
    }
    sorted
}

/// Number of items falling in each bucket.
fn bucket_sizes(items: &[usize], buckets: usize, key: &impl Fn(usize) -> usize) -> Vec<usize> {
    let mut sizes = vec![0usize; buckets];
    for &item in items {
        sizes[key(item)] += 1;
    }
    sizes
}

/// Starting offset of each bucket.
fn bucket_heads(sizes: &[usize]) -> Vec<usize> {
    let mut heads = vec![0usize; sizes.len()];
    let mut sum = 0;
    for (i, &size) in sizes.iter().enumerate() {
        heads[i] = sum;
        sum += size;
    }
    heads
}
