//! Dictionary word representation
//!
//! A Word stores a lowercase dictionary word along with its characters for
//! positional access. Words are variable-length and not restricted to ASCII,
//! so alphabets like the Finnish one (with å/ä/ö) work unchanged.

use std::fmt;

/// A lowercase dictionary word with per-position character access
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    Empty,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Word must not be empty"),
            Self::InvalidCharacters => {
                write!(f, "Word must contain only alphabetic characters")
            }
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is lowercased. Length is arbitrary but must be at least one
    /// character; every character must be alphabetic.
    ///
    /// # Errors
    /// Returns `WordError` if the string is empty or contains
    /// non-alphabetic characters.
    ///
    /// # Examples
    /// ```
    /// use codeword_solver::core::Word;
    ///
    /// let word = Word::new("Hello").unwrap();
    /// assert_eq!(word.text(), "hello");
    /// assert_eq!(word.len(), 5);
    ///
    /// assert!(Word::new("").is_err());
    /// assert!(Word::new("no way").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().to_lowercase();

        if text.is_empty() {
            return Err(WordError::Empty);
        }

        if !text.chars().all(char::is_alphabetic) {
            return Err(WordError::InvalidCharacters);
        }

        let chars: Vec<char> = text.chars().collect();

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a character slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters in the word
    ///
    /// This is the character count, not the byte count.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.chars.contains(&letter)
    }

    /// Check that every letter of the word belongs to `alphabet`
    ///
    /// Used by the loaders to drop dictionary entries outside the puzzle's
    /// alphabet before the core ever sees them.
    #[must_use]
    pub fn fits_alphabet(&self, alphabet: &[char]) -> bool {
        self.chars.iter().all(|c| alphabet.contains(c))
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("hello").unwrap();
        assert_eq!(word.text(), "hello");
        assert_eq!(word.chars(), &['h', 'e', 'l', 'l', 'o']);
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        let word = Word::new("HELLO").unwrap();
        assert_eq!(word.text(), "hello");

        let word2 = Word::new("HeLLo").unwrap();
        assert_eq!(word2.text(), "hello");
    }

    #[test]
    fn word_creation_variable_lengths() {
        assert_eq!(Word::new("i").unwrap().len(), 1);
        assert_eq!(Word::new("to").unwrap().len(), 2);
        assert_eq!(Word::new("uncharacteristic").unwrap().len(), 16);
    }

    #[test]
    fn word_creation_non_ascii() {
        // Finnish letters must survive with correct character counts
        let word = Word::new("älämölö").unwrap();
        assert_eq!(word.len(), 7);
        assert_eq!(word.char_at(0), 'ä');
        assert!(word.has_letter('ö'));
    }

    #[test]
    fn word_creation_invalid() {
        assert!(matches!(Word::new(""), Err(WordError::Empty)));
        assert!(matches!(
            Word::new("abc1"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("no way"),
            Err(WordError::InvalidCharacters)
        ));
        assert!(matches!(
            Word::new("no?"),
            Err(WordError::InvalidCharacters)
        ));
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("read").unwrap();
        assert_eq!(word.char_at(0), 'r');
        assert_eq!(word.char_at(1), 'e');
        assert_eq!(word.char_at(2), 'a');
        assert_eq!(word.char_at(3), 'd');
    }

    #[test]
    fn word_has_letter() {
        let word = Word::new("some").unwrap();
        assert!(word.has_letter('s'));
        assert!(word.has_letter('e'));
        assert!(!word.has_letter('z'));
    }

    #[test]
    fn word_fits_alphabet() {
        let alphabet: Vec<char> = "abcdefg".chars().collect();
        assert!(Word::new("bead").unwrap().fits_alphabet(&alphabet));
        assert!(!Word::new("hello").unwrap().fits_alphabet(&alphabet));

        let finnish: Vec<char> = "abcdefghijklmnopqrstuvwxyzåäö".chars().collect();
        assert!(Word::new("älämölö").unwrap().fits_alphabet(&finnish));
    }

    #[test]
    fn word_display() {
        let word = Word::new("hello").unwrap();
        assert_eq!(format!("{word}"), "hello");
    }

    #[test]
    fn word_equality() {
        let word1 = Word::new("hello").unwrap();
        let word2 = Word::new("HELLO").unwrap();
        let word3 = Word::new("world").unwrap();

        assert_eq!(word1, word2); // Case insensitive
        assert_ne!(word1, word3);
    }
}
