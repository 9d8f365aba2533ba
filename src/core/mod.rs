//! Core domain types for codeword puzzles
//!
//! This module contains the fundamental domain types with zero external
//! dependencies beyond hashing. All types here are pure, testable, and have
//! clear mathematical properties.

mod codeword;
mod substitution;
mod word;

pub use codeword::{Codeword, Symbol, UNKNOWN_LETTER};
pub use substitution::{AssignmentError, Substitution};
pub use word::{Word, WordError};
