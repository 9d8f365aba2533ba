//! Pattern matching and candidate bookkeeping
//!
//! The predicates here are pure; the candidate index is the only stateful
//! piece and only ever narrows or restores its filtered views.

mod candidates;
mod cross;
mod pattern;

pub use candidates::CandidateIndex;
pub use cross::{cross_match, pair_compatible};
pub use pattern::{matches, matches_partial};
