//! Evaluated tour: route plus per-hop distances.

use std::fmt;

use serde::Serialize;

use super::Route;

/// A route together with the distance of every hop and their sum.
///
/// `legs[i]` is the distance from `route.order()[i]` to the next point;
/// the last leg closes the cycle back to the depot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    route: Route,
    legs: Vec<f64>,
    total: f64,
}

impl Tour {
    /// Creates a tour; the total is the sum of `legs`.
    pub(crate) fn new(route: Route, legs: Vec<f64>) -> Self {
        debug_assert_eq!(route.len(), legs.len());
        let total = legs.iter().sum();
        Self { route, legs, total }
    }

    /// The visiting order.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Per-hop distances, closing hop last.
    pub fn legs(&self) -> &[f64] {
        &self.legs
    }

    /// Total closed-tour length.
    pub fn total(&self) -> f64 {
        self.total
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &i in self.route.order() {
            write!(f, "{i} -> ")?;
        }
        write!(f, "{} ({:.2})", super::DEPOT, self.total)
    }
}
