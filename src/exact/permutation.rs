//! Exhaustive permutation search.
//!
//! The depot is fixed at position 0 and every ordering of the remaining
//! `n-1` points is generated in lexicographic order, in place. Fixing the
//! depot removes rotations of the same cycle, but each cycle is still
//! evaluated twice (once per direction).
//!
//! Only the best tour seen so far is kept, so memory stays O(n) no matter
//! how many permutations are visited.
//!
//! # Complexity
//!
//! O((n-1)!·n) time. Practical up to roughly a dozen points.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::{Route, Tour, DEPOT};

/// Outcome of an exhaustive search.
#[derive(Debug, Clone)]
pub struct Enumeration {
    /// The first shortest tour in enumeration order.
    pub tour: Tour,
    /// Number of permutations evaluated.
    pub evaluated: u64,
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns `false` (leaving `items` sorted ascending) once the last
/// permutation has been passed.
///
/// # Examples
///
/// ```
/// use u_tour::exact::next_permutation;
///
/// let mut p = [1, 2, 3];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [1, 3, 2]);
///
/// let mut last = [3, 2, 1];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [1, 2, 3]);
/// ```
pub fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        items.reverse();
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Finds a shortest closed tour by trying every visiting order.
///
/// Candidates are `[0, p...]` for every permutation `p` of `1..n` in
/// lexicographic order. A candidate replaces the incumbent only if its total
/// is strictly smaller, so among equally short tours the first one
/// enumerated is returned.
///
/// # Examples
///
/// ```
/// use u_tour::models::PointSet;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::exact::exhaustive_search;
///
/// let points = PointSet::new([(0.0, 0.0, "A"), (1.0, 1.0, "C"), (0.0, 1.0, "B"), (1.0, 0.0, "D")]).unwrap();
/// let dm = DistanceMatrix::build(points.points()).unwrap();
///
/// let result = exhaustive_search(&dm).unwrap();
/// assert_eq!(result.tour.total(), 4.0);
/// assert_eq!(result.tour.route().order(), &[0, 2, 1, 3]);
/// assert_eq!(result.evaluated, 6);
/// ```
pub fn exhaustive_search(distances: &DistanceMatrix) -> Result<Enumeration> {
    let n = distances.size();
    let mut order: Vec<usize> = (0..n).collect();
    let mut legs = vec![0.0; n];

    let mut best_order = order.clone();
    let mut best_legs = legs.clone();
    let mut best_total = f64::INFINITY;
    let mut evaluated: u64 = 0;

    log::debug!("exhaustive.search: start n={n}");

    loop {
        for i in 0..n {
            legs[i] = distances.get(order[i], order[(i + 1) % n]);
        }
        let total: f64 = legs.iter().sum();
        evaluated += 1;

        if total < best_total {
            best_total = total;
            best_order.copy_from_slice(&order);
            best_legs.copy_from_slice(&legs);
            log::trace!("exhaustive.search: improved total={total:.4} order={order:?}");
        }

        if !next_permutation(&mut order[1..]) {
            break;
        }
    }

    if !best_total.is_finite() {
        return Err(Error::disconnected(format!(
            "no finite tour through {n} points"
        )));
    }

    log::debug!("exhaustive.search: done n={n} evaluated={evaluated} total={best_total:.4}");

    debug_assert_eq!(best_order[0], DEPOT);
    let route = Route::new(best_order)?;
    Ok(Enumeration {
        tour: Tour::new(route, best_legs),
        evaluated,
    })
}
