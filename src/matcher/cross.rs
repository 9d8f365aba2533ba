//! Pairwise cross-matching of two codewords
//!
//! Enumerates joint word assignments for a codeword pair that respect the
//! symbols the two codewords share and, for symbols unique to one side,
//! global injectivity across the pair. Bounding the enumeration with a limit
//! is how uniqueness gets tested without full enumeration.

use crate::core::{Codeword, Word};
use rustc_hash::FxHashSet;

/// Precomputed position structure of a codeword pair
struct PairLayout {
    /// (position in cw1, position in cw2) for every shared-symbol occurrence
    shared: Vec<(usize, usize)>,
    /// First occurrence of each symbol appearing only in cw1
    unique1: Vec<usize>,
    /// First occurrence of each symbol appearing only in cw2
    unique2: Vec<usize>,
}

impl PairLayout {
    fn new(cw1: &Codeword, cw2: &Codeword) -> Self {
        let symbols1 = cw1.distinct_symbols();
        let symbols2 = cw2.distinct_symbols();

        let mut shared = Vec::new();
        for (i, &s1) in cw1.symbols().iter().enumerate() {
            for (j, &s2) in cw2.symbols().iter().enumerate() {
                if s1 == s2 {
                    shared.push((i, j));
                }
            }
        }

        // One position per unique symbol is enough; structural matching has
        // already forced repeated symbols to repeat their letter.
        let mut seen: FxHashSet<u32> = FxHashSet::default();
        let unique1 = cw1
            .symbols()
            .iter()
            .enumerate()
            .filter(|&(_, &s)| !symbols2.contains(&s) && seen.insert(s))
            .map(|(i, _)| i)
            .collect();

        seen.clear();
        let unique2 = cw2
            .symbols()
            .iter()
            .enumerate()
            .filter(|&(_, &s)| !symbols1.contains(&s) && seen.insert(s))
            .map(|(j, _)| j)
            .collect();

        Self {
            shared,
            unique1,
            unique2,
        }
    }

    /// Can `word1`/`word2` jointly decode the pair?
    ///
    /// Shared symbols must carry equal letters at their positions. A letter
    /// sitting on a symbol unique to one codeword must not occur anywhere in
    /// the other word, otherwise two different symbols would claim it. The
    /// rule is applied pair-wide in both directions.
    fn compatible(&self, word1: &Word, word2: &Word) -> bool {
        self.shared
            .iter()
            .all(|&(i, j)| word1.char_at(i) == word2.char_at(j))
            && self
                .unique1
                .iter()
                .all(|&i| !word2.has_letter(word1.char_at(i)))
            && self
                .unique2
                .iter()
                .all(|&j| !word1.has_letter(word2.char_at(j)))
    }
}

/// Can the pair decode to exactly these two words?
///
/// Single-pair form of the cross-match compatibility test.
#[must_use]
pub fn pair_compatible(cw1: &Codeword, cw2: &Codeword, word1: &Word, word2: &Word) -> bool {
    PairLayout::new(cw1, cw2).compatible(word1, word2)
}

/// Enumerate compatible joint assignments for a codeword pair
///
/// Scans `cands1 × cands2` and collects every compatible `(index1, index2)`
/// pair of positions into the candidate slices. The scan aborts and returns
/// `None` the instant the count exceeds `limit`, so callers probing for an
/// exact count pay for at most `limit + 1` hits. A `Some` result is a
/// complete enumeration: its length is the pair's true assignment count,
/// and the same `Some` comes back under every larger limit.
#[must_use]
pub fn cross_match(
    cw1: &Codeword,
    cw2: &Codeword,
    cands1: &[&Word],
    cands2: &[&Word],
    limit: usize,
) -> Option<Vec<(usize, usize)>> {
    let layout = PairLayout::new(cw1, cw2);
    let mut found = Vec::new();

    for (index1, word1) in cands1.iter().enumerate() {
        for (index2, word2) in cands2.iter().enumerate() {
            if layout.compatible(word1, word2) {
                if found.len() == limit {
                    return None;
                }
                found.push((index1, index2));
            }
        }
    }
    Some(found)
}
