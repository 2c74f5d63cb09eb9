//! Human-readable tour rendering.

use std::fmt::Write;

use crate::models::{PointSet, Tour};

/// Renders a tour as labeled hops with their distances and the total.
///
/// Each hop is `(from, to)[distance]`, hops are joined by ` --> `, the
/// closing hop back to the depot comes last and the total follows ` = `.
/// Distances and the total are shown with two decimals.
///
/// # Examples
///
/// ```
/// use u_tour::models::PointSet;
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::exact::exhaustive_search;
/// use u_tour::format::format_tour;
///
/// let points = PointSet::new([(0.0, 0.0, "A"), (0.0, 1.0, "B"), (1.0, 1.0, "C"), (1.0, 0.0, "D")]).unwrap();
/// let dm = DistanceMatrix::build(points.points()).unwrap();
/// let tour = exhaustive_search(&dm).unwrap().tour;
///
/// assert_eq!(
///     format_tour(&tour, &points),
///     "(A, B)[1.00] --> (B, C)[1.00] --> (C, D)[1.00] --> (D, A)[1.00] = 4.00"
/// );
/// ```
pub fn format_tour(tour: &Tour, points: &PointSet) -> String {
    let mut out = String::new();
    for (k, ((from, to), leg)) in tour
        .route()
        .hops()
        .into_iter()
        .zip(tour.legs())
        .enumerate()
    {
        if k > 0 {
            out.push_str(" --> ");
        }
        // Writing to a String cannot fail
        let _ = write!(
            out,
            "({}, {})[{:.2}]",
            points.label(from),
            points.label(to),
            leg
        );
    }
    let _ = write!(out, " = {:.2}", tour.total());
    out
}
