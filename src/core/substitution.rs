//! Partial symbol↔letter substitution
//!
//! The substitution is a partial bijection: no symbol ever has two letters
//! and no letter ever has two symbols. It is the only mutable state in a
//! solving session. The backtracking search never mutates a shared instance;
//! it derives new values with [`Substitution::extended_with`] so no undo
//! bookkeeping is needed.

use super::{Codeword, Symbol, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Error type for rejected assignments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignmentError {
    /// The symbol does not occur in any codeword of the puzzle
    UnknownSymbol(Symbol),
    /// The letter is outside the puzzle's alphabet
    LetterNotInAlphabet(char),
    /// The letter is already assigned to a different symbol
    LetterAlreadyAssigned { letter: char, symbol: Symbol },
    /// The symbol already carries a different letter; use `force` to override
    SymbolAlreadyAssigned { symbol: Symbol, letter: char },
}

impl fmt::Display for AssignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(symbol) => {
                write!(f, "Symbol {symbol} does not occur in the puzzle")
            }
            Self::LetterNotInAlphabet(letter) => {
                write!(f, "Letter '{letter}' is not in the puzzle alphabet")
            }
            Self::LetterAlreadyAssigned { letter, symbol } => {
                write!(f, "Letter '{letter}' is already assigned to symbol {symbol}")
            }
            Self::SymbolAlreadyAssigned { symbol, letter } => {
                write!(f, "Symbol {symbol} is already assigned letter '{letter}'")
            }
        }
    }
}

impl std::error::Error for AssignmentError {}

/// Partial bijection between symbols and letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution {
    by_symbol: FxHashMap<Symbol, char>,
    by_letter: FxHashMap<char, Symbol>,
}

impl Substitution {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The letter assigned to `symbol`, if any
    #[inline]
    #[must_use]
    pub fn letter_for(&self, symbol: Symbol) -> Option<char> {
        self.by_symbol.get(&symbol).copied()
    }

    /// The symbol `letter` is assigned to, if any
    #[inline]
    #[must_use]
    pub fn symbol_for(&self, letter: char) -> Option<Symbol> {
        self.by_letter.get(&letter).copied()
    }

    /// Number of assigned symbols
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_symbol.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_symbol.is_empty()
    }

    /// Add an assignment, rejecting either-direction collisions
    ///
    /// Re-inserting an identical pair is a no-op and succeeds.
    ///
    /// # Errors
    /// Returns `LetterAlreadyAssigned` if the letter belongs to a different
    /// symbol, `SymbolAlreadyAssigned` if the symbol carries a different
    /// letter.
    pub fn insert(&mut self, symbol: Symbol, letter: char) -> Result<(), AssignmentError> {
        if let Some(existing) = self.letter_for(symbol) {
            if existing == letter {
                return Ok(());
            }
            return Err(AssignmentError::SymbolAlreadyAssigned {
                symbol,
                letter: existing,
            });
        }
        if let Some(owner) = self.symbol_for(letter) {
            return Err(AssignmentError::LetterAlreadyAssigned {
                letter,
                symbol: owner,
            });
        }
        self.by_symbol.insert(symbol, letter);
        self.by_letter.insert(letter, symbol);
        Ok(())
    }

    /// Override an entry, evicting whatever conflicts with it
    ///
    /// Removes the symbol's previous letter and the letter's previous symbol
    /// before inserting, so the bijection invariant still holds afterwards.
    /// The greedy consensus driver uses this to replace a weakly-corroborated
    /// fact with a stronger one.
    pub fn force(&mut self, symbol: Symbol, letter: char) {
        if let Some(old_letter) = self.by_symbol.remove(&symbol) {
            self.by_letter.remove(&old_letter);
        }
        if let Some(old_symbol) = self.by_letter.remove(&letter) {
            self.by_symbol.remove(&old_symbol);
        }
        self.by_symbol.insert(symbol, letter);
        self.by_letter.insert(letter, symbol);
    }

    /// Remove every assignment
    pub fn clear(&mut self) {
        self.by_symbol.clear();
        self.by_letter.clear();
    }

    /// Derive a new substitution extended with `codeword` decoding to `word`
    ///
    /// Already-mapped symbols keep their letters (first writer wins); a pair
    /// whose letter is taken by a different symbol is skipped for the same
    /// reason. Callers guard acceptance with `matches_partial`, which makes
    /// both cases mean "already consistent".
    ///
    /// # Panics
    /// Panics in debug mode if lengths differ; the candidate index only ever
    /// pairs equal-length codewords and words.
    #[must_use]
    pub fn extended_with(&self, codeword: &Codeword, word: &Word) -> Self {
        debug_assert_eq!(codeword.len(), word.len());
        let mut extended = self.clone();
        for (&symbol, &letter) in codeword.symbols().iter().zip(word.chars()) {
            let _ = extended.insert(symbol, letter);
        }
        extended
    }

    /// Build a substitution from solved (codeword, word) assignments
    #[must_use]
    pub fn from_assignments<'a, I>(assignments: I) -> Self
    where
        I: IntoIterator<Item = (&'a Codeword, &'a Word)>,
    {
        let mut substitution = Self::new();
        for (codeword, word) in assignments {
            substitution = substitution.extended_with(codeword, word);
        }
        substitution
    }

    /// Entries in ascending symbol order
    #[must_use]
    pub fn entries(&self) -> Vec<(Symbol, char)> {
        let mut entries: Vec<(Symbol, char)> =
            self.by_symbol.iter().map(|(&s, &l)| (s, l)).collect();
        entries.sort_unstable_by_key(|&(symbol, _)| symbol);
        entries
    }

    /// Retain only the symbols for which `keep` returns true
    ///
    /// The refinement loop uses this to drop entries with thin evidence.
    pub fn retain_symbols(&mut self, mut keep: impl FnMut(Symbol) -> bool) {
        let dropped: Vec<Symbol> = self
            .by_symbol
            .keys()
            .copied()
            .filter(|&s| !keep(s))
            .collect();
        for symbol in dropped {
            if let Some(letter) = self.by_symbol.remove(&symbol) {
                self.by_letter.remove(&letter);
            }
        }
    }
}
