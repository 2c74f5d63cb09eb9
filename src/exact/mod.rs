//! Exact tour search.
//!
//! - [`exhaustive_search`] — Enumerates every tour from the depot, O((n-1)!·n)

mod permutation;

pub use permutation::{exhaustive_search, next_permutation, Enumeration};
