//! Codeword representation
//!
//! A codeword is an ordered, immutable sequence of integer symbol ids.
//! Equal ids at different positions stand for equal (unknown) letters, so a
//! codeword's length equals the length of the word it decodes to.

use super::Substitution;
use rustc_hash::FxHashSet;
use std::fmt;

/// Symbol id appearing in codewords
pub type Symbol = u32;

/// Placeholder character for symbols the substitution does not cover yet
pub const UNKNOWN_LETTER: char = '?';

/// An ordered sequence of symbol ids
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codeword {
    symbols: Vec<Symbol>,
}

impl Codeword {
    /// Create a codeword from a symbol sequence
    #[must_use]
    pub fn new(symbols: impl Into<Vec<Symbol>>) -> Self {
        Self {
            symbols: symbols.into(),
        }
    }

    /// Get the symbols as a slice
    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// Number of positions (= length of the decoded word)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the symbol at a specific position
    ///
    /// # Panics
    /// Panics if position >= `self.len()`
    #[inline]
    #[must_use]
    pub fn symbol_at(&self, position: usize) -> Symbol {
        self.symbols[position]
    }

    /// The set of distinct symbols in this codeword
    #[must_use]
    pub fn distinct_symbols(&self) -> FxHashSet<Symbol> {
        self.symbols.iter().copied().collect()
    }

    /// True iff every symbol in the codeword has a letter in `substitution`
    #[must_use]
    pub fn is_solved(&self, substitution: &Substitution) -> bool {
        self.symbols
            .iter()
            .all(|&s| substitution.letter_for(s).is_some())
    }

    /// Decode against a substitution, writing `?` for unmapped symbols
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::{Codeword, Substitution};
    ///
    /// let mut substitution = Substitution::new();
    /// substitution.insert(1, 'h').unwrap();
    /// substitution.insert(2, 'i').unwrap();
    ///
    /// let codeword = Codeword::new(vec![1, 2, 3]);
    /// assert_eq!(codeword.decode(&substitution), "hi?");
    /// ```
    #[must_use]
    pub fn decode(&self, substitution: &Substitution) -> String {
        self.symbols
            .iter()
            .map(|&s| substitution.letter_for(s).unwrap_or(UNKNOWN_LETTER))
            .collect()
    }
}

impl fmt::Display for Codeword {
    /// Renders as comma-separated ids, matching the puzzle file format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for symbol in &self.symbols {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{symbol}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<Vec<Symbol>> for Codeword {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::new(symbols)
    }
}
