//! Pairwise distances between points.
//!
//! Provides the dense, read-only Euclidean distance matrix shared by both
//! tour-finding methods.

mod matrix;

pub use matrix::DistanceMatrix;
