//! Directed edge committed by the matrix reduction.

use serde::{Deserialize, Serialize};

/// A directed hop between two points with its original distance.
///
/// Edges are the intermediate product of the matrix reduction: they are
/// committed in elimination order, not tour order, and only become a
/// [`Route`](super::Route) once assembled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Tail point index.
    pub from: usize,
    /// Head point index.
    pub to: usize,
    /// Distance between the two points.
    pub distance: f64,
}

impl Edge {
    /// Creates a new edge.
    pub fn new(from: usize, to: usize, distance: f64) -> Self {
        Self { from, to, distance }
    }

    /// The same hop traversed the other way round.
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed() {
        let e = Edge::new(2, 4, 3.5);
        let r = e.reversed();
        assert_eq!((r.from, r.to), (4, 2));
        assert_eq!(r.distance, 3.5);
        assert_eq!(r.reversed(), e);
    }
}
