//! # u-tour
//!
//! Closed-tour route finding over small sets of labeled 2D points. Every
//! tour starts and ends at the first point (the depot).
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, PointSet, Edge, Route, Tour)
//! - [`distance`] — Euclidean distance matrix
//! - [`evaluation`] — Per-hop distances and totals of a route
//! - [`exact`] — Exhaustive permutation search (optimal, factorial time)
//! - [`reduction`] — Greedy matrix reduction and edge assembly (heuristic)
//! - [`format`] — Labeled, human-readable tour rendering
//! - [`solver`] — Method selection, fallback and comparison
//! - [`input`] — JSON, random and demo point sets

pub mod distance;
pub mod error;
pub mod evaluation;
pub mod exact;
pub mod format;
pub mod input;
pub mod models;
pub mod reduction;
pub mod solver;

pub use error::{Error, Result};
