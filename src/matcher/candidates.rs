//! Per-codeword candidate lists
//!
//! For every codeword the index keeps two views: the unfiltered list of all
//! structurally matching dictionary words (computed once, never mutated) and
//! the filtered view consistent with the current substitution. Words are
//! referenced by their position in the shared dictionary slice.

use super::pattern::{matches, matches_partial};
use crate::core::{Codeword, Substitution, Word};
use rayon::prelude::*;

/// Candidate word lists for every codeword of a puzzle
#[derive(Debug, Clone)]
pub struct CandidateIndex {
    /// Structural matches per codeword; immutable after build
    all: Vec<Vec<usize>>,
    /// Matches still consistent with the current substitution
    filtered: Vec<Vec<usize>>,
}

impl CandidateIndex {
    /// Build the index by filtering same-length dictionary words through the
    /// structural pattern predicate
    ///
    /// An empty candidate list is permitted; the codeword simply never joins
    /// the active working set. Each codeword's scan is independent, so the
    /// build runs in parallel.
    #[must_use]
    pub fn build(codewords: &[Codeword], dictionary: &[Word]) -> Self {
        let all: Vec<Vec<usize>> = codewords
            .par_iter()
            .map(|codeword| {
                dictionary
                    .iter()
                    .enumerate()
                    .filter(|(_, word)| word.len() == codeword.len())
                    .filter(|(_, word)| matches(word, codeword))
                    .map(|(word_index, _)| word_index)
                    .collect()
            })
            .collect();

        let filtered = all.clone();
        Self { all, filtered }
    }

    /// Number of codewords covered by the index
    #[must_use]
    pub fn len(&self) -> usize {
        self.all.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    /// The filtered candidate list for a codeword
    #[inline]
    #[must_use]
    pub fn candidates(&self, codeword_index: usize) -> &[usize] {
        &self.filtered[codeword_index]
    }

    /// The unfiltered structural matches for a codeword
    #[inline]
    #[must_use]
    pub fn all_candidates(&self, codeword_index: usize) -> &[usize] {
        &self.all[codeword_index]
    }

    /// Current filtered candidate count for a codeword
    #[inline]
    #[must_use]
    pub fn candidate_count(&self, codeword_index: usize) -> usize {
        self.filtered[codeword_index].len()
    }

    /// Codewords whose filtered list is non-empty, in puzzle order
    pub fn active(&self) -> impl Iterator<Item = usize> + '_ {
        self.filtered
            .iter()
            .enumerate()
            .filter(|(_, list)| !list.is_empty())
            .map(|(codeword_index, _)| codeword_index)
    }

    /// Recompute every filtered view from the unfiltered lists
    ///
    /// Codewords whose filtered list empties drop out of the active set; the
    /// unfiltered lists are untouched, so a later [`Self::reset`] restores
    /// them.
    pub fn refresh(
        &mut self,
        codewords: &[Codeword],
        dictionary: &[Word],
        substitution: &Substitution,
    ) {
        for (codeword_index, codeword) in codewords.iter().enumerate() {
            self.filtered[codeword_index] = self.all[codeword_index]
                .iter()
                .copied()
                .filter(|&word_index| {
                    matches_partial(&dictionary[word_index], codeword, substitution)
                })
                .collect();
        }
    }

    /// Restore every filtered view to the full structural match list
    pub fn reset(&mut self) {
        self.filtered = self.all.clone();
    }
}
