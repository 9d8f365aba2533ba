//! Puzzle session state
//!
//! `PuzzleState` owns the immutable puzzle data (codewords, dictionary,
//! alphabet) plus the two pieces that mutate across a solving session: the
//! substitution and the candidate index's filtered views. It is the facade
//! the surrounding CLI code drives; all operations on it are synchronous
//! and it is the sole writer of the substitution.

use super::{
    PairScanner, Solution, UniquePair, extend,
    pairs::find_all_unique_pairs as scan_unique_pairs, refine,
};
use crate::core::{AssignmentError, Codeword, Substitution, Symbol, Word};
use crate::matcher::CandidateIndex;
use rustc_hash::FxHashSet;

/// A loaded puzzle plus its mutable solving state
pub struct PuzzleState {
    codewords: Vec<Codeword>,
    dictionary: Vec<Word>,
    alphabet: Vec<char>,
    symbols: FxHashSet<Symbol>,
    substitution: Substitution,
    index: CandidateIndex,
}

/// Build a puzzle session from plain parsed data
///
/// `codewords` and `words` arrive as the raw shapes the loaders produce;
/// entries that fail word validation or fall outside the alphabet are
/// skipped silently, like any other unusable dictionary row.
#[must_use]
pub fn load_puzzle(
    codewords: Vec<Vec<Symbol>>,
    words: Vec<String>,
    alphabet: &str,
) -> PuzzleState {
    let letters: Vec<char> = alphabet.to_lowercase().chars().collect();
    let codewords: Vec<Codeword> = codewords.into_iter().map(Codeword::new).collect();
    let dictionary: Vec<Word> = words
        .into_iter()
        .filter_map(|w| Word::new(w).ok())
        .filter(|w| w.fits_alphabet(&letters))
        .collect();
    PuzzleState::new(codewords, dictionary, alphabet)
}

impl PuzzleState {
    /// Create a session; candidate lists are built once, immediately
    #[must_use]
    pub fn new(codewords: Vec<Codeword>, dictionary: Vec<Word>, alphabet: &str) -> Self {
        let symbols: FxHashSet<Symbol> = codewords
            .iter()
            .flat_map(|c| c.symbols().iter().copied())
            .collect();
        let index = CandidateIndex::build(&codewords, &dictionary);
        let alphabet: Vec<char> = alphabet.to_lowercase().chars().collect();

        Self {
            codewords,
            dictionary,
            alphabet,
            symbols,
            substitution: Substitution::new(),
            index,
        }
    }

    #[inline]
    #[must_use]
    pub fn codewords(&self) -> &[Codeword] {
        &self.codewords
    }

    #[inline]
    #[must_use]
    pub fn dictionary(&self) -> &[Word] {
        &self.dictionary
    }

    #[inline]
    #[must_use]
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    #[inline]
    #[must_use]
    pub fn substitution(&self) -> &Substitution {
        &self.substitution
    }

    #[inline]
    #[must_use]
    pub fn candidate_index(&self) -> &CandidateIndex {
        &self.index
    }

    /// Number of distinct symbols across the puzzle's codewords
    #[must_use]
    pub fn symbol_count(&self) -> usize {
        self.symbols.len()
    }

    /// Codewords fully covered by the current substitution
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.codewords
            .iter()
            .filter(|c| c.is_solved(&self.substitution))
            .count()
    }

    /// Decode every codeword against the current substitution
    #[must_use]
    pub fn decode_all(&self) -> Vec<(usize, String)> {
        self.codewords
            .iter()
            .enumerate()
            .map(|(i, c)| (i, c.decode(&self.substitution)))
            .collect()
    }

    /// Manually assign a letter to a symbol
    ///
    /// # Errors
    /// `UnknownSymbol` if the symbol occurs in no codeword,
    /// `LetterNotInAlphabet` if the letter falls outside the puzzle's
    /// alphabet, and the substitution's own collision errors otherwise (the
    /// letter-collision error names the colliding symbol). An accepted
    /// assignment re-filters the candidate lists.
    pub fn set_assignment(
        &mut self,
        symbol: Symbol,
        letter: char,
    ) -> Result<(), AssignmentError> {
        if !self.symbols.contains(&symbol) {
            return Err(AssignmentError::UnknownSymbol(symbol));
        }
        let mut lowered = letter.to_lowercase();
        let letter = match (lowered.next(), lowered.next()) {
            (Some(lowercase), None) => lowercase,
            // A letter that lowercases to several characters ('İ' does)
            // cannot be one substitution entry
            _ => return Err(AssignmentError::LetterNotInAlphabet(letter)),
        };
        if !self.alphabet.contains(&letter) {
            return Err(AssignmentError::LetterNotInAlphabet(letter));
        }
        self.substitution.insert(symbol, letter)?;
        self.index
            .refresh(&self.codewords, &self.dictionary, &self.substitution);
        Ok(())
    }

    /// Reset the session: empty substitution, full candidate lists
    ///
    /// Restarts solving without re-parsing any input.
    pub fn clear(&mut self) {
        self.substitution.clear();
        self.index.reset();
    }

    /// Forced facts among the current unsolved codewords
    #[must_use]
    pub fn find_all_unique_pairs(&self) -> Vec<UniquePair> {
        scan_unique_pairs(
            &self.codewords,
            &self.dictionary,
            &self.index,
            &self.substitution,
        )
    }

    /// Resolve a unique pair to its codewords and words
    #[must_use]
    pub fn resolve_pair(&self, pair: &UniquePair) -> ((&Codeword, &Codeword), (&Word, &Word)) {
        (
            (
                &self.codewords[pair.codewords.0],
                &self.codewords[pair.codewords.1],
            ),
            (&self.dictionary[pair.words.0], &self.dictionary[pair.words.1]),
        )
    }

    /// Extension search seeded from the unique-pair scanner
    ///
    /// Each scanner yield (forced pairs first, weaker multi-assignment
    /// facts as the threshold escalates) seeds a backtracking extension
    /// over the remaining active codewords. Returns the first solution
    /// reaching `min_target`, otherwise the best partial found. Pure: the
    /// session is not modified; apply the outcome with
    /// [`Self::apply_solution`].
    #[must_use]
    pub fn start_matching_words(&self, min_target: usize) -> Solution {
        let mut best = Solution::default();
        let scanner = PairScanner::new(
            &self.codewords,
            &self.dictionary,
            &self.index,
            &self.substitution,
        );

        for found in scanner {
            let (cw1, cw2) = found.codewords;
            for &(word1, word2) in &found.assignments {
                let substitution = self
                    .substitution
                    .extended_with(&self.codewords[cw1], &self.dictionary[word1])
                    .extended_with(&self.codewords[cw2], &self.dictionary[word2]);
                let seed = Solution {
                    assignments: vec![(cw1, word1), (cw2, word2)],
                    substitution,
                };

                let remaining: Vec<usize> = self
                    .index
                    .active()
                    .filter(|&i| i != cw1 && i != cw2)
                    .filter(|&i| !self.codewords[i].is_solved(&self.substitution))
                    .collect();

                let result = extend(
                    &self.codewords,
                    &self.dictionary,
                    &self.index,
                    seed,
                    &remaining,
                    min_target,
                );
                if result.solved_count() >= min_target {
                    return result;
                }
                if result.solved_count() > best.solved_count() {
                    best = result;
                }
            }
        }
        best
    }

    /// Iterative refinement entry point
    ///
    /// Runs [`refine`] and commits its substitution into the session.
    pub fn try_to_match_words_to_numbers(
        &mut self,
        min_target: usize,
        min_evidence: usize,
        max_iterations: usize,
    ) -> Solution {
        let result = refine(
            &self.codewords,
            &self.dictionary,
            &mut self.index,
            min_target,
            min_evidence,
            max_iterations,
        );
        self.apply_solution(&result);
        result
    }

    /// Greedy consensus entry point
    pub fn solve_by_consensus(&mut self) -> Solution {
        super::solve_by_consensus(
            &self.codewords,
            &self.dictionary,
            &mut self.index,
            &mut self.substitution,
        )
    }

    /// Commit a solution's substitution and re-filter the candidate lists
    pub fn apply_solution(&mut self, solution: &Solution) {
        self.substitution = solution.substitution.clone();
        self.index
            .refresh(&self.codewords, &self.dictionary, &self.substitution);
    }
}
