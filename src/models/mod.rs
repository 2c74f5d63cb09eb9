//! Domain model types for closed-tour problems.
//!
//! Provides labeled points with a fixed depot, validated point sets,
//! edges as an intermediate representation of the matrix reduction,
//! routes as ordered permutations, and evaluated tours.

mod edge;
mod point;
mod route;
mod tour;

pub use edge::Edge;
pub use point::{Point, PointSet};
pub use route::Route;
pub use tour::Tour;

/// Index of the fixed start and end of every tour.
pub const DEPOT: usize = 0;
