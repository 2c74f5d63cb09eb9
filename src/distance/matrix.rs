//! Dense distance matrix.

use crate::error::{Error, Result};
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Built once per instance and read-only afterwards. Diagonal entries are
/// `+∞` so no point is ever connected to itself.
///
/// # Examples
///
/// ```
/// use u_tour::models::PointSet;
/// use u_tour::distance::DistanceMatrix;
///
/// let points = PointSet::new([(0.0, 0.0, "A"), (3.0, 4.0, "B"), (6.0, 8.0, "C")]).unwrap();
/// let dm = DistanceMatrix::build(points.points()).unwrap();
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!(dm.get(1, 1).is_infinite());
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    fn with_infinite_diagonal(size: usize) -> Self {
        let mut dm = Self {
            data: vec![0.0; size * size],
            size,
        };
        for i in 0..size {
            dm.set(i, i, f64::INFINITY);
        }
        dm
    }

    /// Computes the Euclidean distance matrix of the given points.
    ///
    /// Fails with [`Error::InvalidInput`] for fewer than two points.
    pub fn build(points: &[Point]) -> Result<Self> {
        let n = points.len();
        if n < 2 {
            return Err(Error::invalid_input(format!(
                "need at least 2 points to build a distance matrix, got {n}"
            )));
        }
        let mut dm = Self::with_infinite_diagonal(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Diagonal entries are replaced by `+∞`. Returns `None` if the data
    /// length doesn't match `size * size` or `size < 2`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if size < 2 || data.len() != size * size {
            return None;
        }
        let mut dm = Self { data, size };
        for i in 0..size {
            dm.set(i, i, f64::INFINITY);
        }
        Some(dm)
    }

    /// Returns the distance from point `from` to point `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of points in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
