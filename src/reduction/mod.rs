//! Greedy matrix-reduction heuristic and edge assembly.
//!
//! - [`reduce`] — Row/column reduction with maximum-penalty edge commitment, O(n⁴)
//! - [`assemble`] — Chains the committed edges into a route from the depot, O(n)

mod assemble;
mod reducer;

pub use assemble::assemble;
pub use reducer::{reduce, ReductionState};
