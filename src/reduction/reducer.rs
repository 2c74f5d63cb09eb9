//! Greedy matrix reduction ("Little's method", single path).
//!
//! # Algorithm
//!
//! Repeated on a shrinking cost matrix until one cell remains:
//!
//! 1. Subtract each row's smallest finite value from the row, then each
//!    column's from the column.
//! 2. For every zero cell `(r, c)` compute its penalty: the smallest other
//!    value in row `r` plus the smallest other value in column `c`.
//! 3. Commit the zero cell with the largest penalty as an edge. Ties keep
//!    the first cell in row-major order.
//! 4. Forbid the reverse edge, then drop row `r` and column `c`.
//!
//! The last remaining cell is committed as a forced edge.
//!
//! Committed edges are never revisited. There is no bounding and no
//! second branch, so the result is a heuristic tour and may even fail to
//! form a single cycle.
//!
//! # Complexity
//!
//! O(n⁴) time in the worst case (O(n²) zero cells per step, each penalty
//! O(n)), O(n²) memory.
//!
//! # Reference
//!
//! Little, J.D.C., Murty, K.G., Sweeney, D.W., Karel, C. (1963). "An
//! algorithm for the traveling salesman problem", *Operations Research*
//! 11(6), 972-989.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Edge;

/// Working state of one reduction run.
///
/// The cost grid keeps its full n×n allocation. Rows and columns are removed
/// by dropping them from `rows` / `cols`, which map the current position to
/// the original point index.
///
/// # Examples
///
/// ```
/// use u_tour::models::PointSet;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::reduction::ReductionState;
///
/// let points = PointSet::new([(0.0, 0.0, "A"), (0.0, 1.0, "B"), (1.0, 1.0, "C")]).unwrap();
/// let dm = DistanceMatrix::build(points.points()).unwrap();
///
/// let mut state = ReductionState::new(&dm);
/// assert_eq!(state.size(), 3);
/// state.step().unwrap();
/// assert_eq!(state.size(), 2);
/// assert_eq!(state.edges().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ReductionState<'a> {
    distances: &'a DistanceMatrix,
    costs: Vec<f64>,
    stride: usize,
    rows: Vec<usize>,
    cols: Vec<usize>,
    edges: Vec<Edge>,
}

/// A zero cell chosen for commitment, in current positions.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    row: usize,
    col: usize,
    penalty: f64,
}

impl<'a> ReductionState<'a> {
    /// Starts a reduction over a copy of `distances`.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        let n = distances.size();
        let mut costs = Vec::with_capacity(n * n);
        for i in 0..n {
            costs.extend_from_slice(distances.row(i));
        }
        Self {
            distances,
            costs,
            stride: n,
            rows: (0..n).collect(),
            cols: (0..n).collect(),
            edges: Vec::with_capacity(n),
        }
    }

    /// Number of rows (and columns) still in the matrix.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Edges committed so far, in commit order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Original point index of each remaining row.
    pub fn row_labels(&self) -> &[usize] {
        &self.rows
    }

    /// Original point index of each remaining column.
    pub fn col_labels(&self) -> &[usize] {
        &self.cols
    }

    /// Current cost of the cell at position `(r, c)`.
    pub fn cost(&self, r: usize, c: usize) -> f64 {
        self.costs[self.rows[r] * self.stride + self.cols[c]]
    }

    fn set_cost(&mut self, r: usize, c: usize, value: f64) {
        self.costs[self.rows[r] * self.stride + self.cols[c]] = value;
    }

    /// Subtracts each row's smallest finite value from that row.
    pub fn reduce_rows(&mut self) {
        let k = self.size();
        for r in 0..k {
            let min = min_finite((0..k).map(|c| self.cost(r, c)));
            if let Some(min) = min {
                for c in 0..k {
                    let v = self.cost(r, c);
                    self.set_cost(r, c, v - min);
                }
            }
        }
    }

    /// Subtracts each column's smallest finite value from that column.
    pub fn reduce_cols(&mut self) {
        let k = self.size();
        for c in 0..k {
            let min = min_finite((0..k).map(|r| self.cost(r, c)));
            if let Some(min) = min {
                for r in 0..k {
                    let v = self.cost(r, c);
                    self.set_cost(r, c, v - min);
                }
            }
        }
    }

    /// Smallest value in row `r` other than column `c` plus smallest value
    /// in column `c` other than row `r`.
    pub fn penalty(&self, r: usize, c: usize) -> f64 {
        let k = self.size();
        let row_min = (0..k)
            .filter(|&j| j != c)
            .map(|j| self.cost(r, j))
            .fold(f64::INFINITY, f64::min);
        let col_min = (0..k)
            .filter(|&i| i != r)
            .map(|i| self.cost(i, c))
            .fold(f64::INFINITY, f64::min);
        row_min + col_min
    }

    /// Zero cell with the largest penalty, first in row-major order on ties.
    fn select(&self) -> Option<Candidate> {
        let k = self.size();
        let mut best: Option<Candidate> = None;
        for r in 0..k {
            for c in 0..k {
                if self.cost(r, c) != 0.0 {
                    continue;
                }
                let penalty = self.penalty(r, c);
                if best.map_or(true, |b| penalty > b.penalty) {
                    best = Some(Candidate { row: r, col: c, penalty });
                }
            }
        }
        best
    }

    fn commit(&mut self, r: usize, c: usize) {
        let from = self.rows[r];
        let to = self.cols[c];
        let distance = self.distances.get(from, to);
        self.edges.push(Edge::new(from, to, distance));
    }

    /// Performs one reduce/select/commit/shrink step.
    ///
    /// On a 1×1 matrix the last cell is committed as a forced edge and the
    /// state becomes empty. Fails with [`Error::DisconnectedTours`] when no
    /// zero cell exists, which only happens when every remaining cell is
    /// forbidden.
    pub fn step(&mut self) -> Result<()> {
        match self.size() {
            0 => return Ok(()),
            1 => {
                self.commit(0, 0);
                log::debug!(
                    "reduction.step: forced edge {} -> {}",
                    self.rows[0],
                    self.cols[0]
                );
                self.rows.clear();
                self.cols.clear();
                return Ok(());
            }
            _ => {}
        }

        self.reduce_rows();
        self.reduce_cols();

        let chosen = self.select().ok_or_else(|| {
            Error::disconnected(format!(
                "no admissible edge among rows {:?} and columns {:?}",
                self.rows, self.cols
            ))
        })?;

        let from = self.rows[chosen.row];
        let to = self.cols[chosen.col];
        self.commit(chosen.row, chosen.col);
        log::debug!(
            "reduction.step: size={} edge {from} -> {to} penalty={:.4}",
            self.size(),
            chosen.penalty
        );

        let mirror_row = self.rows.iter().position(|&i| i == to);
        let mirror_col = self.cols.iter().position(|&j| j == from);
        if let (Some(mr), Some(mc)) = (mirror_row, mirror_col) {
            self.set_cost(mr, mc, f64::INFINITY);
        }

        self.rows.remove(chosen.row);
        self.cols.remove(chosen.col);
        Ok(())
    }

    /// Runs steps until the matrix is exhausted and returns every committed
    /// edge.
    pub fn run(mut self) -> Result<Vec<Edge>> {
        while self.size() > 0 {
            self.step()?;
        }
        Ok(self.edges)
    }
}

fn min_finite(values: impl Iterator<Item = f64>) -> Option<f64> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.min(v)))
        })
}

/// Reduces `distances` to one committed edge per point.
///
/// The returned edges are in commit order, not tour order; pass them to
/// [`assemble`](super::assemble) to obtain a route.
///
/// # Examples
///
/// ```
/// use u_tour::models::PointSet;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::reduction::reduce;
///
/// let points = PointSet::new([(0.0, 0.0, "A"), (0.0, 1.0, "B"), (1.0, 1.0, "C"), (1.0, 0.0, "D")]).unwrap();
/// let dm = DistanceMatrix::build(points.points()).unwrap();
///
/// let edges = reduce(&dm).unwrap();
/// assert_eq!(edges.len(), 4);
/// let total: f64 = edges.iter().map(|e| e.distance).sum();
/// assert_eq!(total, 4.0);
/// ```
pub fn reduce(distances: &DistanceMatrix) -> Result<Vec<Edge>> {
    log::debug!("reduction.reduce: start n={}", distances.size());
    let edges = ReductionState::new(distances).run()?;
    log::debug!("reduction.reduce: done edges={}", edges.len());
    Ok(edges)
}
