//! Backtracking extension search
//!
//! Grows a partial solution across the remaining codewords depth-first,
//! most constrained codeword first. Acceptance is guarded by
//! `matches_partial` and every acceptance derives a fresh substitution
//! value, so branches cannot corrupt each other and backtracking needs no
//! undo step. The search is satisficing: it stops at the first branch that
//! reaches the target solved count, and when no branch gets there it
//! returns the best partial seen along the way.

use super::Solution;
use crate::core::{Codeword, Word};
use crate::matcher::{CandidateIndex, matches_partial};

struct SearchContext<'a> {
    codewords: &'a [Codeword],
    dictionary: &'a [Word],
    index: &'a CandidateIndex,
    min_target: usize,
}

/// Extend a seed solution over `remaining` codewords
///
/// `remaining` holds codeword indices; they are reordered by ascending
/// candidate-list size before the descent. Skipping a codeword entirely is
/// allowed — the search looks for any subset reaching `min_target`, not a
/// full cover. Worst case exponential; `matches_partial` prunes hard in
/// practice.
#[must_use]
pub fn extend(
    codewords: &[Codeword],
    dictionary: &[Word],
    index: &CandidateIndex,
    seed: Solution,
    remaining: &[usize],
    min_target: usize,
) -> Solution {
    if seed.solved_count() >= min_target {
        return seed;
    }

    let mut ordered: Vec<usize> = remaining.to_vec();
    ordered.sort_by_key(|&i| index.candidate_count(i));

    let context = SearchContext {
        codewords,
        dictionary,
        index,
        min_target,
    };

    let mut best = seed.clone();
    match descend(&context, &ordered, &seed, &mut best) {
        Some(hit) => hit,
        None => best,
    }
}

/// Depth-first descent; `Some` short-circuits the moment a branch reaches
/// the target
fn descend(
    context: &SearchContext<'_>,
    remaining: &[usize],
    current: &Solution,
    best: &mut Solution,
) -> Option<Solution> {
    for (depth, &codeword_index) in remaining.iter().enumerate() {
        let codeword = &context.codewords[codeword_index];
        for &word_index in context.index.candidates(codeword_index) {
            let word = &context.dictionary[word_index];
            if !matches_partial(word, codeword, &current.substitution) {
                continue;
            }

            let mut assignments = current.assignments.clone();
            assignments.push((codeword_index, word_index));
            let child = Solution {
                assignments,
                substitution: current.substitution.extended_with(codeword, word),
            };

            if child.solved_count() >= context.min_target {
                return Some(child);
            }
            if child.solved_count() > best.solved_count() {
                *best = child.clone();
            }
            if let Some(hit) = descend(context, &remaining[depth + 1..], &child, best) {
                return Some(hit);
            }
        }
    }
    None
}
