//! Solver facade tying the distance table, both tour-finding methods and
//! the edge assembly together.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::evaluation::TourEvaluator;
use crate::exact::exhaustive_search;
use crate::models::{PointSet, Tour, DEPOT};
use crate::reduction::{assemble, reduce};

/// Tour-finding method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Every visiting order is tried; always optimal.
    #[default]
    Exhaustive,
    /// Greedy matrix reduction; fast, not guaranteed optimal.
    Reduction,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhaustive => f.write_str("exhaustive"),
            Self::Reduction => f.write_str("reduction"),
        }
    }
}

/// Solver settings.
///
/// # Examples
///
/// ```
/// use u_tour::solver::{Method, SolverConfig};
///
/// let config: SolverConfig = serde_json::from_str(r#"{ "method": "reduction" }"#).unwrap();
/// assert_eq!(config.method, Method::Reduction);
/// assert!(config.fallback_to_exhaustive);
/// assert_eq!(config.max_exhaustive_points, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Method tried first.
    pub method: Method,
    /// Run the exhaustive search when the reduction edges do not form one cycle.
    pub fallback_to_exhaustive: bool,
    /// Largest instance the exhaustive search accepts.
    pub max_exhaustive_points: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            method: Method::Exhaustive,
            fallback_to_exhaustive: true,
            max_exhaustive_points: 10,
        }
    }
}

impl SolverConfig {
    /// Config running `method` with the default limits.
    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }
}

/// A solved instance.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The tour found.
    pub tour: Tour,
    /// The method that produced `tour`.
    pub method: Method,
    /// `true` if the configured method failed and the exhaustive search
    /// produced the tour instead.
    pub fell_back: bool,
}

/// Both methods run on the same instance.
#[derive(Debug, Clone)]
pub struct Comparison {
    /// Optimal tour.
    pub exact: Tour,
    /// Reduction tour, `None` if its edges did not form one cycle.
    pub heuristic: Option<Tour>,
}

impl Comparison {
    /// Relative excess of the heuristic over the optimum, e.g. `0.05` for 5%.
    pub fn gap(&self) -> Option<f64> {
        self.heuristic
            .as_ref()
            .map(|h| (h.total() - self.exact.total()) / self.exact.total())
    }
}

/// Runs the exhaustive search, refusing instances above the configured size.
pub fn solve_exhaustive(distances: &DistanceMatrix, config: &SolverConfig) -> Result<Tour> {
    let n = distances.size();
    if n > config.max_exhaustive_points {
        return Err(Error::TooManyPoints {
            points: n,
            limit: config.max_exhaustive_points,
        });
    }
    let result = exhaustive_search(distances)?;
    log::info!(
        "exhaustive: n={n} permutations={} total={:.4}",
        result.evaluated,
        result.tour.total()
    );
    Ok(result.tour)
}

/// Runs the matrix reduction, assembles its edges and evaluates the route.
///
/// Fails with [`Error::DisconnectedTours`] when the committed edges do not
/// chain into a single cycle.
pub fn solve_reduction(distances: &DistanceMatrix) -> Result<Tour> {
    let edges = reduce(distances)?;
    let route = assemble(&edges, DEPOT)?;
    let tour = TourEvaluator::new(distances).evaluate(route)?;
    log::info!(
        "reduction: n={} total={:.4}",
        distances.size(),
        tour.total()
    );
    Ok(tour)
}

/// Finds a closed tour through `points` starting and ending at the depot.
///
/// # Examples
///
/// ```
/// use u_tour::models::PointSet;
/// use u_tour::solver::{solve, Method, SolverConfig};
///
/// let points = PointSet::new([(0.0, 0.0, "A"), (0.0, 1.0, "B"), (1.0, 1.0, "C"), (1.0, 0.0, "D")]).unwrap();
///
/// let exact = solve(&points, &SolverConfig::default()).unwrap();
/// assert_eq!(exact.tour.total(), 4.0);
///
/// let greedy = solve(&points, &SolverConfig::with_method(Method::Reduction)).unwrap();
/// assert_eq!(greedy.method, Method::Reduction);
/// assert_eq!(greedy.tour.total(), 4.0);
/// ```
pub fn solve(points: &PointSet, config: &SolverConfig) -> Result<Solution> {
    let distances = DistanceMatrix::build(points.points())?;
    log::debug!(
        "solver.solve: n={} method={} fallback={}",
        points.len(),
        config.method,
        config.fallback_to_exhaustive
    );

    match config.method {
        Method::Exhaustive => Ok(Solution {
            tour: solve_exhaustive(&distances, config)?,
            method: Method::Exhaustive,
            fell_back: false,
        }),
        Method::Reduction => match solve_reduction(&distances) {
            Ok(tour) => Ok(Solution {
                tour,
                method: Method::Reduction,
                fell_back: false,
            }),
            Err(e)
                if e.is_disconnected()
                    && config.fallback_to_exhaustive
                    && points.len() <= config.max_exhaustive_points =>
            {
                log::warn!("reduction failed ({e}); falling back to exhaustive search");
                Ok(Solution {
                    tour: solve_exhaustive(&distances, config)?,
                    method: Method::Exhaustive,
                    fell_back: true,
                })
            }
            Err(e) => Err(e),
        },
    }
}

/// Runs both methods on `points`.
///
/// A reduction that does not form one cycle is reported as `None` rather
/// than as an error.
pub fn compare(points: &PointSet, config: &SolverConfig) -> Result<Comparison> {
    let distances = DistanceMatrix::build(points.points())?;
    let exact = solve_exhaustive(&distances, config)?;
    let heuristic = match solve_reduction(&distances) {
        Ok(tour) => Some(tour),
        Err(e) if e.is_disconnected() => {
            log::warn!("reduction failed: {e}");
            None
        }
        Err(e) => return Err(e),
    };
    Ok(Comparison { exact, heuristic })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_office() -> PointSet {
        PointSet::new([
            (0.0, 2.0, "A"),
            (2.0, 5.0, "B"),
            (5.0, 2.0, "C"),
            (6.0, 6.0, "D"),
            (8.0, 3.0, "E"),
        ])
        .expect("valid")
    }

    fn unit_square() -> PointSet {
        PointSet::new([
            (0.0, 0.0, "A"),
            (0.0, 1.0, "B"),
            (1.0, 1.0, "C"),
            (1.0, 0.0, "D"),
        ])
        .expect("valid")
    }

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.method, Method::Exhaustive);
        assert!(config.fallback_to_exhaustive);
        assert_eq!(config.max_exhaustive_points, 10);
    }

    #[test]
    fn test_config_roundtrip_names() {
        let json = serde_json::to_string(&SolverConfig::with_method(Method::Reduction))
            .expect("serializable");
        assert!(json.contains("\"reduction\""));
    }

    #[test]
    fn test_exhaustive_is_deterministic() {
        let points = post_office();
        let config = SolverConfig::default();
        let a = solve(&points, &config).expect("solved");
        let b = solve(&points, &config).expect("solved");
        assert_eq!(a.tour.total(), b.tour.total());
        assert_eq!(a.tour.route(), b.tour.route());
        assert_eq!(a.tour.route().order()[0], DEPOT);
        assert_eq!(points.label(a.tour.route().order()[0]), "A");
    }

    #[test]
    fn test_post_office_tour() {
        let points = post_office();
        let exact = solve(&points, &SolverConfig::default()).expect("solved");
        assert_eq!(exact.tour.route().order(), &[0, 1, 3, 4, 2]);
        assert!((exact.tour.total() - 19.4965).abs() < 1e-4);
        assert_eq!(
            crate::format::format_tour(&exact.tour, &points),
            "(A, B)[3.61] --> (B, D)[4.12] --> (D, E)[3.61] --> (E, C)[3.16] --> (C, A)[5.00] = 19.50"
        );

        // the reduction happens to find the same cycle here
        let greedy =
            solve(&points, &SolverConfig::with_method(Method::Reduction)).expect("solved");
        assert!(!greedy.fell_back);
        assert_eq!(greedy.tour.route(), exact.tour.route());
    }

    #[test]
    fn test_unit_square_both_methods() {
        let points = unit_square();
        let exact = solve(&points, &SolverConfig::default()).expect("solved");
        assert_eq!(exact.tour.total(), 4.0);
        let greedy =
            solve(&points, &SolverConfig::with_method(Method::Reduction)).expect("solved");
        assert!(!greedy.fell_back);
        assert_eq!(greedy.tour.total(), 4.0);
    }

    #[test]
    fn test_reduction_not_better_than_exact() {
        let cmp = compare(&post_office(), &SolverConfig::default()).expect("compared");
        if let Some(h) = &cmp.heuristic {
            assert!(h.total() >= cmp.exact.total() - 1e-9);
            assert!(cmp.gap().expect("heuristic present") >= -1e-9);
        }
    }

    /// Reduction commits 0 -> 1 -> 2 -> 0 and 3 <-> 4 here.
    fn split_instance() -> PointSet {
        PointSet::new([
            (0.0, 0.0, "A"),
            (1.0, 1.0, "B"),
            (2.0, 2.0, "C"),
            (2.0, 3.0, "D"),
            (3.0, 2.0, "E"),
        ])
        .expect("valid")
    }

    #[test]
    fn test_reduction_falls_back() {
        let points = split_instance();
        let sol = solve(&points, &SolverConfig::with_method(Method::Reduction)).expect("solved");
        assert!(sol.fell_back);
        assert_eq!(sol.method, Method::Exhaustive);

        let exact = solve(&points, &SolverConfig::default()).expect("solved");
        assert_eq!(sol.tour.route(), exact.tour.route());
    }

    #[test]
    fn test_reduction_without_fallback() {
        let config = SolverConfig {
            method: Method::Reduction,
            fallback_to_exhaustive: false,
            ..SolverConfig::default()
        };
        let err = solve(&split_instance(), &config).expect_err("split");
        assert!(err.is_disconnected());
    }

    #[test]
    fn test_fallback_respects_limit() {
        let config = SolverConfig {
            method: Method::Reduction,
            fallback_to_exhaustive: true,
            max_exhaustive_points: 4,
        };
        let err = solve(&split_instance(), &config).expect_err("too large to fall back");
        assert!(err.is_disconnected());
    }

    #[test]
    fn test_compare_reports_split() {
        let cmp = compare(&split_instance(), &SolverConfig::default()).expect("compared");
        assert!(cmp.heuristic.is_none());
        assert!(cmp.gap().is_none());
    }

    #[test]
    fn test_too_many_points() {
        let points = PointSet::new((0..6).map(|i| (i as f64, (i * i) as f64, format!("P{i}"))))
            .expect("valid");
        let config = SolverConfig {
            max_exhaustive_points: 5,
            ..SolverConfig::default()
        };
        let err = solve(&points, &config).expect_err("limit");
        assert!(matches!(
            err,
            Error::TooManyPoints {
                points: 6,
                limit: 5
            }
        ));
    }

    #[test]
    fn test_reduction_ignores_exhaustive_limit() {
        let points = PointSet::new((0..12).map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / 12.0;
            (angle.cos() * 10.0, angle.sin() * 10.0, format!("P{i}"))
        }))
        .expect("valid");
        let config = SolverConfig {
            method: Method::Reduction,
            fallback_to_exhaustive: false,
            max_exhaustive_points: 4,
        };
        match solve(&points, &config) {
            Ok(sol) => {
                assert_eq!(sol.method, Method::Reduction);
                assert_eq!(sol.tour.route().len(), 12);
            }
            Err(e) => assert!(e.is_disconnected()),
        }
    }

    #[test]
    fn test_method_display() {
        assert_eq!(Method::Exhaustive.to_string(), "exhaustive");
        assert_eq!(Method::Reduction.to_string(), "reduction");
    }
}
