//! Chains reduction edges into a route.

use crate::error::{Error, Result};
use crate::models::{Edge, Route};

/// Orders an unordered edge set into one cycle starting at `depot`.
///
/// Every point must appear exactly once as a tail and exactly once as a
/// head, and following successors from the depot must visit all points
/// before closing. Anything else (sub-cycles, dangling chains, repeated
/// tails) fails with [`Error::DisconnectedTours`].
///
/// # Examples
///
/// ```
/// use u_tour::models::Edge;
/// use u_tour::reduction::assemble;
///
/// let edges = [Edge::new(2, 0, 1.0), Edge::new(0, 1, 1.0), Edge::new(1, 2, 1.0)];
/// let route = assemble(&edges, 0).unwrap();
/// assert_eq!(route.order(), &[0, 1, 2]);
///
/// let split = [Edge::new(0, 1, 1.0), Edge::new(1, 0, 1.0), Edge::new(2, 3, 1.0), Edge::new(3, 2, 1.0)];
/// assert!(assemble(&split, 0).is_err());
/// ```
pub fn assemble(edges: &[Edge], depot: usize) -> Result<Route> {
    let n = edges.len();
    if depot >= n {
        return Err(Error::disconnected(format!(
            "depot {depot} is not covered by {n} edges"
        )));
    }

    let mut successor: Vec<Option<usize>> = vec![None; n];
    for e in edges {
        if e.from >= n || e.to >= n {
            return Err(Error::disconnected(format!(
                "edge {} -> {} leaves the {n} points",
                e.from, e.to
            )));
        }
        if let Some(prev) = successor[e.from].replace(e.to) {
            return Err(Error::disconnected(format!(
                "point {} has two successors ({prev} and {})",
                e.from, e.to
            )));
        }
    }

    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut current = depot;
    visited[current] = true;
    order.push(current);

    while order.len() < n {
        let next = successor[current].ok_or_else(|| {
            Error::disconnected(format!("no edge leaves point {current}"))
        })?;
        if visited[next] {
            return Err(Error::disconnected(format!(
                "cycle closes at point {next} after {} of {n} points: {order:?}",
                order.len()
            )));
        }
        visited[next] = true;
        order.push(next);
        current = next;
    }

    if successor[current] != Some(depot) {
        return Err(Error::disconnected(format!(
            "last point {current} does not return to the depot"
        )));
    }

    Route::new(order)
        .map_err(|e| Error::disconnected(format!("assembled order is not a route: {e}")))
}
