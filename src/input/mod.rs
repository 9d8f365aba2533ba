//! Puzzle input loading
//!
//! Parses the two on-disk shapes the solver consumes: a codeword file of
//! comma-separated integer lines and a tab-delimited dictionary file whose
//! first column is the word. Both parsers hand the core plain data; all
//! file-format concerns stop here.

use crate::core::Symbol;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A parsed codeword file: the codewords plus any `#` comment lines
///
/// Comment lines are kept because puzzle files use them for titles and
/// provenance notes worth echoing back to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodewordFile {
    pub codewords: Vec<Vec<Symbol>>,
    pub comments: Vec<String>,
}

/// Parse codeword CSV text
///
/// One codeword per line, fields separated by commas. Lines starting with
/// `#` are collected as comments; blank lines are skipped. Fields after the
/// first empty field are ignored, so trailing commas and ragged
/// spreadsheet exports parse cleanly.
///
/// # Errors
/// Returns an error naming the line number when a field is not an integer.
pub fn parse_codewords(text: &str) -> Result<CodewordFile> {
    let mut parsed = CodewordFile::default();

    for (line_number, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(comment) = trimmed.strip_prefix('#') {
            parsed.comments.push(comment.trim().to_string());
            continue;
        }

        let codeword: Vec<Symbol> = line
            .split(',')
            .map(str::trim)
            .take_while(|field| !field.is_empty())
            .map(|field| {
                field
                    .parse::<Symbol>()
                    .with_context(|| format!("line {}: '{field}' is not a number", line_number + 1))
            })
            .collect::<Result<_>>()?;
        if !codeword.is_empty() {
            parsed.codewords.push(codeword);
        }
    }
    Ok(parsed)
}

/// Load and parse a codeword file
///
/// # Errors
/// I/O errors carry the path; parse errors carry the offending line.
pub fn load_codewords<P: AsRef<Path>>(path: P) -> Result<CodewordFile> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read codeword file '{}'", path.display()))?;
    parse_codewords(&text)
        .with_context(|| format!("invalid codeword file '{}'", path.display()))
}

/// Resolve a codeword path the forgiving way: as given, then with `.csv`
#[must_use]
pub fn resolve_codeword_path(raw: &str) -> Option<PathBuf> {
    let direct = PathBuf::from(raw);
    if direct.exists() {
        return Some(direct);
    }
    let with_extension = PathBuf::from(format!("{raw}.csv"));
    with_extension.exists().then_some(with_extension)
}

/// Parse dictionary text into lowercase words inside the alphabet
///
/// Tab-delimited rows; only the first column is the word (frequency-list
/// exports carry counts in later columns). Words with letters outside
/// `alphabet` are dropped so the solver never proposes a word the puzzle's
/// language cannot contain.
#[must_use]
pub fn parse_dictionary(text: &str, alphabet: &str) -> Vec<String> {
    let alphabet: Vec<char> = alphabet.to_lowercase().chars().collect();

    text.lines()
        .filter_map(|line| {
            let word = line.split('\t').next().unwrap_or("").trim().to_lowercase();
            if word.is_empty() {
                return None;
            }
            word.chars()
                .all(|c| alphabet.contains(&c))
                .then_some(word)
        })
        .collect()
}

/// Load and parse a dictionary file
///
/// # Errors
/// Returns an I/O error carrying the path; unparseable rows never error,
/// they are filtered like any out-of-alphabet word.
pub fn load_dictionary<P: AsRef<Path>>(path: P, alphabet: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read dictionary file '{}'", path.display()))?;
    Ok(parse_dictionary(&text, alphabet))
}
