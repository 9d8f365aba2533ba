//! Codeword solving algorithms
//!
//! Unique-pair detection bootstraps a partial substitution, the extension
//! search grows it by backtracking, and the refinement loop and consensus
//! propagator are the two top-level drivers built on top of them.

mod consensus;
mod extend;
mod pairs;
mod puzzle;
mod refine;

pub use consensus::solve_by_consensus;
pub use extend::extend;
pub use pairs::{PairMatches, PairScanner, UniquePair, find_all_unique_pairs};
pub use puzzle::{PuzzleState, load_puzzle};
pub use refine::refine;

use crate::core::Substitution;

/// A partial solving outcome
///
/// `assignments` pairs codeword indices with dictionary word indices;
/// `substitution` is the symbol→letter map those assignments imply. A
/// solution is never asserted complete — an under-determined puzzle yields a
/// partial (possibly empty) one.
#[derive(Debug, Clone, Default)]
pub struct Solution {
    pub assignments: Vec<(usize, usize)>,
    pub substitution: Substitution,
}

impl Solution {
    /// Number of codewords this solution accepts as solved
    #[inline]
    #[must_use]
    pub fn solved_count(&self) -> usize {
        self.assignments.len()
    }
}
