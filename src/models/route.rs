//! Route type: the visiting order of a closed tour.

use serde::Serialize;

use super::DEPOT;
use crate::error::{Error, Result};

/// An ordered visit of every point exactly once, starting at the depot.
///
/// The closing hop `(last, depot)` is implicit and not stored.
///
/// # Examples
///
/// ```
/// use u_tour::models::Route;
///
/// let route = Route::new(vec![0, 2, 1, 3]).unwrap();
/// assert_eq!(route.len(), 4);
/// assert_eq!(route.hops(), vec![(0, 2), (2, 1), (1, 3), (3, 0)]);
///
/// assert!(Route::new(vec![1, 0, 2]).is_err()); // must start at the depot
/// assert!(Route::new(vec![0, 1, 1]).is_err()); // not a permutation
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    order: Vec<usize>,
}

impl Route {
    /// Creates a route from a visiting order over `0..order.len()`.
    ///
    /// Fails with [`Error::InvalidInput`] unless `order` is a permutation
    /// of `0..n` whose first element is the depot.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        if order.first() != Some(&DEPOT) {
            return Err(Error::invalid_input(format!(
                "route must start at the depot, got {:?}",
                order.first()
            )));
        }
        let n = order.len();
        let mut seen = vec![false; n];
        for &i in &order {
            if i >= n || seen[i] {
                return Err(Error::invalid_input(format!(
                    "route {order:?} is not a permutation of 0..{n}"
                )));
            }
            seen[i] = true;
        }
        Ok(Self { order })
    }

    /// Visiting order, depot first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Number of points visited, depot included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always `false` for a constructed route.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Consecutive `(from, to)` pairs including the closing hop to the depot.
    pub fn hops(&self) -> Vec<(usize, usize)> {
        let n = self.order.len();
        (0..n)
            .map(|i| (self.order[i], self.order[(i + 1) % n]))
            .collect()
    }

    /// The same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut order = Vec::with_capacity(self.order.len());
        order.push(DEPOT);
        order.extend(self.order[1..].iter().rev());
        Self { order }
    }
}
