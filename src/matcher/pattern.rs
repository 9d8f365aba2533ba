//! Structural pattern matching between words and codewords
//!
//! Two equal-length sequences match when their repetition patterns coincide:
//! repeated symbols must line up with repeated letters at the same positions
//! and vice versa. [`matches`] tests pure structure; [`matches_partial`]
//! additionally holds a word against an accumulated substitution.

use crate::core::{Codeword, Substitution, Word};
use rustc_hash::FxHashMap;

/// Is `word` structurally isomorphic to `codeword`?
///
/// True iff lengths are equal and for every position pair (i, j),
/// `word[i] == word[j]` exactly when `codeword[i] == codeword[j]`. The
/// result is invariant under any bijective relabeling of the codeword's
/// symbols and is independent of any substitution.
///
/// # Examples
/// ```
/// use codeword_solver::core::{Codeword, Word};
/// use codeword_solver::matcher::matches;
///
/// let hello = Word::new("hello").unwrap();
/// assert!(matches(&hello, &Codeword::new(vec![1, 2, 3, 3, 4])));
///
/// // Positions 1 and 4 share a symbol but carry 'o' and 'd'
/// let world = Word::new("world").unwrap();
/// assert!(!matches(&world, &Codeword::new(vec![1, 2, 3, 4, 2])));
/// ```
#[must_use]
pub fn matches(word: &Word, codeword: &Codeword) -> bool {
    if word.len() != codeword.len() {
        return false;
    }

    // Grow a local bijection position by position; any conflict in either
    // direction means the partitions differ.
    let mut symbol_to_letter: FxHashMap<u32, char> = FxHashMap::default();
    let mut letter_to_symbol: FxHashMap<char, u32> = FxHashMap::default();

    for (&symbol, &letter) in codeword.symbols().iter().zip(word.chars()) {
        match symbol_to_letter.get(&symbol) {
            Some(&mapped) if mapped != letter => return false,
            Some(_) => {}
            None => {
                if letter_to_symbol.contains_key(&letter) {
                    return false;
                }
                symbol_to_letter.insert(symbol, letter);
                letter_to_symbol.insert(letter, symbol);
            }
        }
    }
    true
}

/// Is `word` still a possible decoding of `codeword` under `substitution`?
///
/// True iff (a) wherever the codeword's symbol is already mapped, the word
/// carries exactly the mapped letter, and (b) the word never places, at an
/// unmapped symbol's position, a letter the substitution has already given
/// to a different symbol. (b) preserves eventual injectivity.
///
/// Structure is not re-checked here; candidate lists are pre-filtered with
/// [`matches`].
#[must_use]
pub fn matches_partial(word: &Word, codeword: &Codeword, substitution: &Substitution) -> bool {
    if word.len() != codeword.len() {
        return false;
    }

    for (&symbol, &letter) in codeword.symbols().iter().zip(word.chars()) {
        match substitution.letter_for(symbol) {
            Some(expected) => {
                if expected != letter {
                    return false;
                }
            }
            None => {
                if substitution.symbol_for(letter).is_some() {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn substitution(pairs: &[(u32, char)]) -> Substitution {
        let mut s = Substitution::new();
        for &(symbol, letter) in pairs {
            s.insert(symbol, letter).unwrap();
        }
        s
    }

    #[test]
    fn matches_repeated_symbols() {
        assert!(matches(&word("hello"), &Codeword::new(vec![1, 2, 3, 3, 4])));
        assert!(!matches(&word("world"), &Codeword::new(vec![1, 2, 3, 4, 2])));
    }

    #[test]
    fn matches_requires_equal_length() {
        assert!(!matches(&word("hello"), &Codeword::new(vec![1, 2, 3])));
        assert!(!matches(&word("to"), &Codeword::new(vec![1, 2, 3])));
    }

    #[test]
    fn matches_rejects_repeated_letters_on_distinct_symbols() {
        // "abccd" fits 1,2,3,3,4 but "hello" pattern on all-distinct fails
        assert!(matches(&word("abccd"), &Codeword::new(vec![1, 2, 3, 3, 4])));
        assert!(!matches(
            &word("hello"),
            &Codeword::new(vec![1, 2, 3, 4, 5])
        ));
    }

    #[test]
    fn matches_invariant_under_relabeling() {
        // The predicate only sees the partition, not the ids themselves
        let w = word("hello");
        assert!(matches(&w, &Codeword::new(vec![1, 2, 3, 3, 4])));
        assert!(matches(&w, &Codeword::new(vec![9, 70, 5, 5, 812])));
        assert!(matches(&w, &Codeword::new(vec![4, 3, 2, 2, 1])));
    }

    #[test]
    fn matches_single_letter_and_all_same() {
        assert!(matches(&word("i"), &Codeword::new(vec![42])));
        assert!(matches(&word("aaa"), &Codeword::new(vec![7, 7, 7])));
        assert!(!matches(&word("aab"), &Codeword::new(vec![7, 7, 7])));
    }

    #[test]
    fn matches_partial_unmapped_symbols_free() {
        let s = substitution(&[(1, 'h'), (2, 'e'), (3, 'r')]);
        // Symbols 10 and 15 are unmapped; 'l' and 'o' are unused letters
        assert!(matches_partial(
            &word("hello"),
            &Codeword::new(vec![1, 2, 10, 10, 15]),
            &s
        ));
    }

    #[test]
    fn matches_partial_rejects_used_letter_on_unmapped_symbol() {
        let s = substitution(&[(1, 'h'), (2, 'e'), (3, 'r')]);
        // Symbol 3 already means 'r', so "hello" cannot put 'l' there; and
        // an unmapped symbol may not reuse 'h'
        assert!(!matches_partial(
            &word("hello"),
            &Codeword::new(vec![1, 2, 3, 3, 15]),
            &s
        ));
        assert!(!matches_partial(
            &word("hat"),
            &Codeword::new(vec![50, 51, 52]),
            &s
        ));
    }

    #[test]
    fn matches_partial_mapped_symbol_must_agree() {
        let s = substitution(&[(1, 'h'), (2, 'e'), (3, 'r')]);
        // Symbol 1 means 'h', but "world" has 'w' at that position
        assert!(!matches_partial(
            &word("world"),
            &Codeword::new(vec![1, 2, 3, 4, 5]),
            &s
        ));
        // Symbol 3 means 'r' and "world" has 'r' there; the rest are
        // unmapped symbols carrying unused letters
        assert!(matches_partial(
            &word("world"),
            &Codeword::new(vec![0, 314, 3, 10, 28]),
            &s
        ));
    }

    #[test]
    fn matches_partial_empty_substitution_accepts_anything_structural() {
        let s = Substitution::new();
        assert!(matches_partial(
            &word("hello"),
            &Codeword::new(vec![1, 2, 3, 3, 4]),
            &s
        ));
    }

    #[test]
    fn matches_partial_full_coverage_forces_word() {
        // When the substitution covers every symbol, only the implied word
        // passes.
        let s = substitution(&[(1, 's'), (2, 'o'), (3, 'm'), (4, 'e')]);
        let codeword = Codeword::new(vec![1, 2, 3, 4]);
        assert!(matches_partial(&word("some"), &codeword, &s));
        assert!(!matches_partial(&word("sole"), &codeword, &s));
        assert!(!matches_partial(&word("read"), &codeword, &s));
    }
}
