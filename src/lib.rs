//! Codeword Solver
//!
//! A solver for codeword (number cryptogram) puzzles: every distinct number
//! stands for one letter of the alphabet, and the same number means the same
//! letter everywhere. The solver cross-matches codewords against a dictionary
//! to discover the substitution.
//!
//! # Quick Start
//!
//! ```rust
//! use codeword_solver::solver::load_puzzle;
//!
//! let puzzle = load_puzzle(
//!     vec![vec![1, 2, 3, 4], vec![5, 4, 6, 7]],
//!     vec!["some".to_string(), "read".to_string()],
//!     "abcdefghijklmnopqrstuvwxyz",
//! );
//! let solution = puzzle.start_matching_words(2);
//! println!("solved {} codewords", solution.solved_count());
//! ```

// Core domain types
pub mod core;

// Pattern matching and candidate filtering
pub mod matcher;

// Solving algorithms
pub mod solver;

// Puzzle and dictionary file loading
pub mod input;

// Terminal output formatting
pub mod output;
