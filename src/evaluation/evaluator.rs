//! Tour evaluator that computes per-hop distances and the closed-tour total.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Route, Tour};

/// Evaluates routes against a distance matrix.
///
/// # Examples
///
/// ```
/// use u_tour::models::{PointSet, Route};
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::TourEvaluator;
///
/// let points = PointSet::new([(0.0, 0.0, "A"), (0.0, 1.0, "B"), (1.0, 1.0, "C"), (1.0, 0.0, "D")]).unwrap();
/// let dm = DistanceMatrix::build(points.points()).unwrap();
///
/// let evaluator = TourEvaluator::new(&dm);
/// let tour = evaluator.evaluate(Route::new(vec![0, 1, 2, 3]).unwrap()).unwrap();
/// assert_eq!(tour.legs(), &[1.0, 1.0, 1.0, 1.0]);
/// assert_eq!(tour.total(), 4.0);
/// ```
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator over the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// Computes the distance of every hop of `route`, closing hop included.
    ///
    /// Fails with [`Error::InvalidInput`] if the route does not cover the
    /// matrix exactly, and with [`Error::DisconnectedTours`] if a hop is not
    /// finite.
    pub fn evaluate(&self, route: Route) -> Result<Tour> {
        if route.len() != self.distances.size() {
            return Err(Error::invalid_input(format!(
                "route visits {} points but the matrix has {}",
                route.len(),
                self.distances.size()
            )));
        }
        let legs: Vec<f64> = route
            .hops()
            .into_iter()
            .map(|(from, to)| self.distances.get(from, to))
            .collect();
        if let Some(pos) = legs.iter().position(|d| !d.is_finite()) {
            return Err(Error::disconnected(format!(
                "hop {:?} has no finite distance",
                route.hops()[pos]
            )));
        }
        Ok(Tour::new(route, legs))
    }

    /// Closed-tour length of a raw visiting order, closing hop included.
    ///
    /// Does not validate `order`; callers pass orders they built themselves.
    pub fn length(&self, order: &[usize]) -> f64 {
        if order.is_empty() {
            return 0.0;
        }
        let mut dist = 0.0;
        for w in order.windows(2) {
            dist += self.distances.get(w[0], w[1]);
        }
        dist + self.distances.get(order[order.len() - 1], order[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PointSet;

    fn unit_square() -> DistanceMatrix {
        let points = PointSet::new([
            (0.0, 0.0, "A"),
            (0.0, 1.0, "B"),
            (1.0, 1.0, "C"),
            (1.0, 0.0, "D"),
        ])
        .expect("valid");
        DistanceMatrix::build(points.points()).expect("valid")
    }

    #[test]
    fn test_evaluate_perimeter() {
        let dm = unit_square();
        let tour = TourEvaluator::new(&dm)
            .evaluate(Route::new(vec![0, 1, 2, 3]).expect("valid"))
            .expect("finite");
        assert_eq!(tour.total(), 4.0);
    }

    #[test]
    fn test_evaluate_crossing() {
        let dm = unit_square();
        let tour = TourEvaluator::new(&dm)
            .evaluate(Route::new(vec![0, 2, 1, 3]).expect("valid"))
            .expect("finite");
        let diag = 2.0_f64.sqrt();
        assert!((tour.total() - (2.0 + 2.0 * diag)).abs() < 1e-10);
        assert_eq!(tour.legs()[3], 1.0);
    }

    #[test]
    fn test_evaluate_size_mismatch() {
        let dm = unit_square();
        let err = TourEvaluator::new(&dm)
            .evaluate(Route::new(vec![0, 1, 2]).expect("valid"))
            .expect_err("mismatch");
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_evaluate_rejects_infinite_hop() {
        let dm = DistanceMatrix::from_data(
            3,
            vec![0.0, 1.0, f64::INFINITY, 1.0, 0.0, 1.0, 1.0, 1.0, 0.0],
        )
        .expect("valid");
        let err = TourEvaluator::new(&dm)
            .evaluate(Route::new(vec![0, 2, 1]).expect("valid"))
            .expect_err("infinite");
        assert!(err.is_disconnected());
    }

    #[test]
    fn test_length_matches_evaluate() {
        let dm = unit_square();
        let evaluator = TourEvaluator::new(&dm);
        let order = [0, 3, 1, 2];
        let tour = evaluator
            .evaluate(Route::new(order.to_vec()).expect("valid"))
            .expect("finite");
        assert_eq!(evaluator.length(&order), tour.total());
        assert_eq!(evaluator.length(&[]), 0.0);
    }
}
