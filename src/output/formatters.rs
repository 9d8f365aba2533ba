//! Formatting utilities for terminal output

use crate::core::{Codeword, Substitution, UNKNOWN_LETTER};

/// Right-pad `text` with spaces to at least `width` display columns
///
/// Width is counted in characters, which is good enough for the alphabets
/// puzzles use.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let length = text.chars().count();
    let mut padded = String::from(text);
    padded.extend(std::iter::repeat_n(' ', width.saturating_sub(length)));
    padded
}

/// Substitution entries as aligned `symbol → letter` lines
#[must_use]
pub fn substitution_table(substitution: &Substitution) -> Vec<String> {
    let entries = substitution.entries();
    let symbol_width = entries
        .iter()
        .map(|(symbol, _)| symbol.to_string().len())
        .max()
        .unwrap_or(1);

    entries
        .iter()
        .map(|(symbol, letter)| format!("{symbol:>symbol_width$} → {letter}"))
        .collect()
}

/// Codewords and their decodings as aligned two-column rows
///
/// The codeword column is padded to the widest codeword so the decoded
/// words line up; unassigned symbols decode to the placeholder character.
#[must_use]
pub fn decode_grid(codewords: &[Codeword], substitution: &Substitution) -> Vec<String> {
    let codeword_width = codewords
        .iter()
        .map(|c| c.to_string().chars().count())
        .max()
        .unwrap_or(0);

    codewords
        .iter()
        .map(|codeword| {
            format!(
                "{}  {}",
                pad(&codeword.to_string(), codeword_width),
                codeword.decode(substitution)
            )
        })
        .collect()
}

/// One-line solve summary: solved / total plus how much is still hidden
#[must_use]
pub fn solve_summary(codewords: &[Codeword], substitution: &Substitution) -> String {
    let solved = codewords
        .iter()
        .filter(|c| c.is_solved(substitution))
        .count();
    let unknowns: usize = codewords
        .iter()
        .map(|c| {
            c.decode(substitution)
                .chars()
                .filter(|&ch| ch == UNKNOWN_LETTER)
                .count()
        })
        .sum();
    format!(
        "{solved}/{} codewords solved, {unknowns} letters unknown",
        codewords.len()
    )
}
