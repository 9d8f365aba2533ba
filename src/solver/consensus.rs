//! Greedy consensus propagation
//!
//! An alternative driver to the extension/refinement pipeline: instead of
//! searching, it repeatedly commits the single most-corroborated forced fact
//! implied by the current unique pairs. Each unique pair votes for its two
//! (codeword, word) facts; the fact with the most votes is committed with
//! override authority and the candidate lists are re-filtered before the
//! next scan. Greedy and information-maximizing, but not guaranteed correct
//! when a structurally matching word is not the intended one.

use super::{Solution, pairs::find_all_unique_pairs};
use crate::core::{Codeword, Substitution, Word};
use crate::matcher::CandidateIndex;
use rustc_hash::{FxHashMap, FxHashSet};

/// Tally votes per fact, keeping first-encounter order for tie-breaking
fn most_corroborated(facts: impl Iterator<Item = (usize, usize)>) -> Option<(usize, usize)> {
    let mut votes: FxHashMap<(usize, usize), usize> = FxHashMap::default();
    let mut order: Vec<(usize, usize)> = Vec::new();

    for fact in facts {
        let count = votes.entry(fact).or_insert(0);
        if *count == 0 {
            order.push(fact);
        }
        *count += 1;
    }

    let mut winner: Option<((usize, usize), usize)> = None;
    for fact in order {
        let count = votes[&fact];
        // Strict comparison keeps the earliest fact on ties
        if winner.is_none_or(|(_, best)| count > best) {
            winner = Some((fact, count));
        }
    }
    winner.map(|(fact, _)| fact)
}

/// Drive the substitution by repeated unique-pair consensus
///
/// Writes through `substitution` (the driver is the sole writer; the pair
/// scans only read immutable snapshots) and leaves the index filtered
/// against the final map. Committing a fact may override earlier entries,
/// so previously accepted codewords are re-checked after every commit and
/// dropped if their decoding no longer holds. Re-encountering an
/// already-committed fact ends the loop: no new information is left.
pub fn solve_by_consensus(
    codewords: &[Codeword],
    dictionary: &[Word],
    index: &mut CandidateIndex,
    substitution: &mut Substitution,
) -> Solution {
    let mut committed: FxHashSet<(usize, usize)> = FxHashSet::default();
    let mut accepted: FxHashMap<usize, usize> = FxHashMap::default();

    loop {
        let uniques = find_all_unique_pairs(codewords, dictionary, index, substitution);
        if uniques.is_empty() {
            break;
        }

        let facts = uniques.iter().flat_map(|unique| {
            [
                (unique.codewords.0, unique.words.0),
                (unique.codewords.1, unique.words.1),
            ]
        });
        let Some((codeword_index, word_index)) = most_corroborated(facts) else {
            break;
        };
        if !committed.insert((codeword_index, word_index)) {
            break;
        }

        let codeword = &codewords[codeword_index];
        let word = &dictionary[word_index];
        for (&symbol, &letter) in codeword.symbols().iter().zip(word.chars()) {
            substitution.force(symbol, letter);
        }
        accepted.insert(codeword_index, word_index);

        // Overrides may have invalidated earlier acceptances
        accepted.retain(|&cw, &mut w| codewords[cw].decode(substitution) == dictionary[w].text());

        index.refresh(codewords, dictionary, substitution);
    }

    let mut assignments: Vec<(usize, usize)> = accepted.into_iter().collect();
    assignments.sort_unstable();
    Solution {
        assignments,
        substitution: substitution.clone(),
    }
}
