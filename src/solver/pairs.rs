//! Unique-pair detection
//!
//! A codeword pair with exactly one compatible joint assignment is a forced
//! fact: both words must be what the single assignment says. These facts are
//! the base case for bootstrapping a substitution. When no pair is strictly
//! unique, the scanner retries pairs at thresholds 2, 3, … so a puzzle
//! without an immediately-forced pair still yields (weaker) starting facts.

use crate::core::{Codeword, Substitution, Word};
use crate::matcher::{CandidateIndex, cross_match};
use rayon::prelude::*;
use rustc_hash::FxHashSet;

/// A forced fact: a codeword pair with exactly one joint assignment
///
/// Indices refer to the puzzle's codeword list and dictionary respectively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniquePair {
    pub codewords: (usize, usize),
    pub words: (usize, usize),
}

/// All joint assignments of a pair found at its first exact threshold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatches {
    pub codewords: (usize, usize),
    /// The pair's complete joint assignments; their number equals
    /// `threshold`
    pub assignments: Vec<(usize, usize)>,
    /// The threshold the pair satisfied exactly (1 = forced)
    pub threshold: usize,
}

/// Candidate lists of unsolved codewords, cheapest first
///
/// Ordering by list size makes the scan probe the most constrained pairs
/// before the expensive ones.
fn unsolved_by_cost(
    codewords: &[Codeword],
    index: &CandidateIndex,
    substitution: &Substitution,
) -> Vec<(usize, Vec<usize>)> {
    let mut lists: Vec<(usize, Vec<usize>)> = index
        .active()
        .filter(|&i| !codewords[i].is_solved(substitution))
        .map(|i| (i, index.candidates(i).to_vec()))
        .collect();
    lists.sort_by_key(|(_, list)| list.len());
    lists
}

/// Scan every unordered pair of not-fully-solved codewords for forced facts
///
/// Each pair is probed with `limit = 1`; a single compatible assignment is
/// returned as a [`UniquePair`]. The scan is a pure read over the candidate
/// index, so the pairs are probed in parallel; result order still follows
/// the cheapest-first pair ordering.
#[must_use]
pub fn find_all_unique_pairs(
    codewords: &[Codeword],
    dictionary: &[Word],
    index: &CandidateIndex,
    substitution: &Substitution,
) -> Vec<UniquePair> {
    let lists = unsolved_by_cost(codewords, index, substitution);

    let mut pairs = Vec::new();
    for a in 0..lists.len() {
        for b in (a + 1)..lists.len() {
            pairs.push((a, b));
        }
    }

    pairs
        .par_iter()
        .filter_map(|&(a, b)| {
            let (cw1, cands1) = &lists[a];
            let (cw2, cands2) = &lists[b];
            let words1: Vec<&Word> = cands1.iter().map(|&w| &dictionary[w]).collect();
            let words2: Vec<&Word> = cands2.iter().map(|&w| &dictionary[w]).collect();

            let found = cross_match(&codewords[*cw1], &codewords[*cw2], &words1, &words2, 1)?;
            match found.as_slice() {
                [(i, j)] => Some(UniquePair {
                    codewords: (*cw1, *cw2),
                    words: (cands1[*i], cands2[*j]),
                }),
                _ => None,
            }
        })
        .collect()
}

/// Outcome of probing one pair at the scanner's current threshold
enum Probe {
    /// The pair's count equals the threshold exactly
    Hit(PairMatches),
    /// Complete enumeration fell short of the threshold; the count can
    /// never satisfy a later threshold either
    Dead,
    /// The count exceeds the current threshold; retry after escalation
    Over,
}

/// Restartable lazy scan with threshold escalation
///
/// The first pass yields every pair with exactly one compatible assignment.
/// Pairs that failed are retried at threshold 2, then 3, and so on; a pair
/// yields all its assignments at the first threshold it satisfies exactly,
/// then never again. A pair whose complete enumeration falls short of the
/// threshold is retired as dead, so the scan terminates once every pair has
/// either yielded or died, with no ceiling on the threshold.
/// [`Self::with_max_threshold`] bounds the escalation for callers that only
/// want cheap facts. Candidate lists are snapshotted at construction, so the
/// scan is unaffected by concurrent refreshes of the index it was built
/// from.
pub struct PairScanner<'a> {
    codewords: &'a [Codeword],
    dictionary: &'a [Word],
    lists: Vec<(usize, Vec<usize>)>,
    pairs: Vec<(usize, usize)>,
    retired: FxHashSet<usize>,
    threshold: usize,
    cursor: usize,
    max_threshold: usize,
}

impl<'a> PairScanner<'a> {
    #[must_use]
    pub fn new(
        codewords: &'a [Codeword],
        dictionary: &'a [Word],
        index: &CandidateIndex,
        substitution: &Substitution,
    ) -> Self {
        Self::with_max_threshold(codewords, dictionary, index, substitution, usize::MAX)
    }

    #[must_use]
    pub fn with_max_threshold(
        codewords: &'a [Codeword],
        dictionary: &'a [Word],
        index: &CandidateIndex,
        substitution: &Substitution,
        max_threshold: usize,
    ) -> Self {
        let lists = unsolved_by_cost(codewords, index, substitution);
        let mut pairs = Vec::new();
        for a in 0..lists.len() {
            for b in (a + 1)..lists.len() {
                pairs.push((a, b));
            }
        }
        Self {
            codewords,
            dictionary,
            lists,
            pairs,
            retired: FxHashSet::default(),
            threshold: 1,
            cursor: 0,
            max_threshold,
        }
    }

    fn probe(&self, pair_position: usize) -> Probe {
        let (a, b) = self.pairs[pair_position];
        let (cw1, cands1) = &self.lists[a];
        let (cw2, cands2) = &self.lists[b];
        let words1: Vec<&Word> = cands1.iter().map(|&w| &self.dictionary[w]).collect();
        let words2: Vec<&Word> = cands2.iter().map(|&w| &self.dictionary[w]).collect();

        let Some(found) = cross_match(
            &self.codewords[*cw1],
            &self.codewords[*cw2],
            &words1,
            &words2,
            self.threshold,
        ) else {
            return Probe::Over;
        };
        if found.len() < self.threshold {
            return Probe::Dead;
        }
        Probe::Hit(PairMatches {
            codewords: (*cw1, *cw2),
            assignments: found
                .into_iter()
                .map(|(i, j)| (cands1[i], cands2[j]))
                .collect(),
            threshold: self.threshold,
        })
    }
}

impl Iterator for PairScanner<'_> {
    type Item = PairMatches;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.cursor >= self.pairs.len() {
                // Every live pair exhausted at this threshold; escalate
                if self.retired.len() == self.pairs.len() {
                    return None;
                }
                self.threshold += 1;
                self.cursor = 0;
                if self.threshold > self.max_threshold {
                    return None;
                }
            }
            let pair_position = self.cursor;
            self.cursor += 1;
            if self.retired.contains(&pair_position) {
                continue;
            }
            match self.probe(pair_position) {
                Probe::Hit(found) => {
                    self.retired.insert(pair_position);
                    return Some(found);
                }
                Probe::Dead => {
                    self.retired.insert(pair_position);
                }
                Probe::Over => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Codeword>, Vec<Word>) {
        // The six-codeword test puzzle: only the last two codewords have
        // structural matches in the dictionary.
        let codewords = vec![
            Codeword::new(vec![1, 2, 3, 4, 5, 6]),
            Codeword::new(vec![3, 7, 9]),
            Codeword::new(vec![8, 10, 11]),
            Codeword::new(vec![10, 12, 13]),
            Codeword::new(vec![3, 22, 24, 15]),
            Codeword::new(vec![21, 15, 13, 11]),
        ];
        let dictionary = [
            "some",
            "words",
            "here",
            "to",
            "be",
            "read",
            "by",
            "someone",
            "or",
            "something",
            "cola",
            "camp",
        ]
        .iter()
        .map(|w| Word::new(*w).unwrap())
        .collect();
        (codewords, dictionary)
    }

    /// Disjoint two-letter codewords over "to"/"be"/"ta": the only joint
    /// pairings without a shared letter are to/be, be/to, be/ta and ta/be,
    /// so the lone pair's exact count is 4.
    fn escalation_fixture() -> (Vec<Codeword>, Vec<Word>) {
        let codewords = vec![Codeword::new(vec![1, 2]), Codeword::new(vec![3, 4])];
        let dictionary = ["to", "be", "ta"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        (codewords, dictionary)
    }

    #[test]
    fn find_all_unique_pairs_fixture() {
        let (codewords, dictionary) = fixture();
        let index = CandidateIndex::build(&codewords, &dictionary);
        let substitution = Substitution::new();

        let found = find_all_unique_pairs(&codewords, &dictionary, &index, &substitution);
        assert_eq!(found.len(), 1);

        let unique = &found[0];
        assert_eq!(unique.codewords, (4, 5));
        assert_eq!(dictionary[unique.words.0].text(), "some");
        assert_eq!(dictionary[unique.words.1].text(), "read");
    }

    #[test]
    fn find_all_unique_pairs_skips_solved() {
        let (codewords, dictionary) = fixture();
        let index = CandidateIndex::build(&codewords, &dictionary);

        // Fully solving codeword 4 removes it from the pair scan
        let some = Word::new("some").unwrap();
        let substitution = Substitution::new().extended_with(&codewords[4], &some);

        let found = find_all_unique_pairs(&codewords, &dictionary, &index, &substitution);
        assert!(found.is_empty());
    }

    #[test]
    fn pair_scanner_yields_forced_pair_first() {
        let (codewords, dictionary) = fixture();
        let index = CandidateIndex::build(&codewords, &dictionary);
        let substitution = Substitution::new();

        let mut scanner = PairScanner::new(&codewords, &dictionary, &index, &substitution);
        let first = scanner.next().unwrap();
        assert_eq!(first.threshold, 1);
        assert_eq!(first.codewords, (4, 5));
        assert_eq!(first.assignments.len(), 1);
        let (w1, w2) = first.assignments[0];
        assert_eq!(dictionary[w1].text(), "some");
        assert_eq!(dictionary[w2].text(), "read");
    }

    #[test]
    fn pair_scanner_escalates_threshold() {
        let (codewords, dictionary) = escalation_fixture();
        let index = CandidateIndex::build(&codewords, &dictionary);
        let substitution = Substitution::new();

        let mut scanner = PairScanner::new(&codewords, &dictionary, &index, &substitution);
        let found = scanner.next().unwrap();
        assert_eq!(found.threshold, 4);
        assert_eq!(found.assignments.len(), 4);
        assert!(scanner.next().is_none());
    }

    #[test]
    fn pair_scanner_escalates_without_bound() {
        // Four pairwise letter-disjoint candidates per side give the lone
        // pair 4 x 3 = 12 joint assignments; the default scan must climb
        // all the way there instead of giving up.
        let codewords = vec![Codeword::new(vec![1, 2]), Codeword::new(vec![3, 4])];
        let dictionary: Vec<Word> = ["to", "be", "up", "in"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let index = CandidateIndex::build(&codewords, &dictionary);
        let substitution = Substitution::new();

        let mut scanner = PairScanner::new(&codewords, &dictionary, &index, &substitution);
        let found = scanner.next().unwrap();
        assert_eq!(found.threshold, 12);
        assert_eq!(found.assignments.len(), 12);
        assert!(scanner.next().is_none());
    }

    #[test]
    fn pair_scanner_respects_threshold_cap() {
        let (codewords, dictionary) = escalation_fixture();
        let index = CandidateIndex::build(&codewords, &dictionary);
        let substitution = Substitution::new();

        // Cap below the pair's true count of 4: the scan ends empty
        let mut scanner = PairScanner::with_max_threshold(
            &codewords,
            &dictionary,
            &index,
            &substitution,
            3,
        );
        assert!(scanner.next().is_none());
    }

    #[test]
    fn pair_scanner_retires_dead_pairs() {
        // "to" and "ot" always collide on their letters, so the pair's
        // count is zero; it must die at threshold 1 instead of driving the
        // escalation forever.
        let codewords = vec![Codeword::new(vec![1, 2]), Codeword::new(vec![3, 4])];
        let dictionary: Vec<Word> = ["to", "ot"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let index = CandidateIndex::build(&codewords, &dictionary);
        let substitution = Substitution::new();

        let mut scanner = PairScanner::new(&codewords, &dictionary, &index, &substitution);
        assert!(scanner.next().is_none());
        assert_eq!(scanner.threshold, 1);
    }

    #[test]
    fn pair_scanner_empty_puzzle() {
        let codewords: Vec<Codeword> = Vec::new();
        let dictionary: Vec<Word> = Vec::new();
        let index = CandidateIndex::build(&codewords, &dictionary);
        let substitution = Substitution::new();

        let mut scanner = PairScanner::new(&codewords, &dictionary, &index, &substitution);
        assert!(scanner.next().is_none());
    }
}
