//! Labeled points and validated point sets.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A labeled location on the plane.
///
/// Point 0 is the depot. Identity is by index, never by coordinates.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let a = Point::new(0, 0.0, 0.0, "A");
/// let b = Point::new(1, 3.0, 4.0, "B");
/// assert_eq!(b.index(), 1);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    index: usize,
    x: f64,
    y: f64,
    label: String,
}

impl Point {
    /// Creates a new point.
    pub fn new(index: usize, x: f64, y: f64, label: impl Into<String>) -> Self {
        Self {
            index,
            x,
            y,
            label: label.into(),
        }
    }

    /// Position in the owning point set (0 = depot).
    pub fn index(&self) -> usize {
        self.index
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if this point is the depot.
    pub fn is_depot(&self) -> bool {
        self.index == super::DEPOT
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    fn same_location(&self, other: &Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// An ordered, validated set of points.
///
/// Entries keep their insertion order; the first one becomes the depot.
/// Construction fails fast when fewer than two points are given, when a
/// coordinate is not finite, or when two points share a location.
///
/// # Examples
///
/// ```
/// use u_tour::models::PointSet;
///
/// let points = PointSet::new([(0.0, 2.0, "A"), (2.0, 5.0, "B"), (5.0, 2.0, "C")]).unwrap();
/// assert_eq!(points.len(), 3);
/// assert_eq!(points.depot().label(), "A");
///
/// assert!(PointSet::new([(0.0, 0.0, "A")]).is_err());
/// assert!(PointSet::new([(1.0, 1.0, "A"), (1.0, 1.0, "B")]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Builds a point set from `(x, y, label)` entries in insertion order.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64, S)>,
        S: Into<String>,
    {
        let points: Vec<Point> = entries
            .into_iter()
            .enumerate()
            .map(|(i, (x, y, label))| Point::new(i, x, y, label))
            .collect();

        if points.len() < 2 {
            return Err(Error::invalid_input(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }

        for p in &points {
            if !p.x.is_finite() || !p.y.is_finite() {
                return Err(Error::invalid_input(format!(
                    "point {} ({}) has non-finite coordinates ({}, {})",
                    p.index, p.label, p.x, p.y
                )));
            }
        }

        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                if points[i].same_location(&points[j]) {
                    return Err(Error::invalid_input(format!(
                        "points {} ({}) and {} ({}) share coordinates ({}, {})",
                        i, points[i].label, j, points[j].label, points[j].x, points[j].y
                    )));
                }
            }
        }

        Ok(Self { points })
    }

    /// Number of points, depot included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false` for a constructed set, which holds at least two points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The fixed start point.
    pub fn depot(&self) -> &Point {
        &self.points[super::DEPOT]
    }

    /// Returns the point at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// All points in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Label of the point at `index`, or `"?"` when out of range.
    pub fn label(&self, index: usize) -> &str {
        self.points.get(index).map_or("?", Point::label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_accessors() {
        let p = Point::new(2, 1.5, -3.0, "Baker St.");
        assert_eq!(p.index(), 2);
        assert_eq!(p.x(), 1.5);
        assert_eq!(p.y(), -3.0);
        assert_eq!(p.label(), "Baker St.");
        assert!(!p.is_depot());
        assert!(Point::new(0, 0.0, 0.0, "depot").is_depot());
    }

    #[test]
    fn test_point_distance_symmetric() {
        let a = Point::new(0, 1.0, 2.0, "a");
        let b = Point::new(1, 4.0, 6.0, "b");
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
    }

    #[test]
    fn test_point_set_keeps_order() {
        let set = PointSet::new([(8.0, 3.0, "E"), (0.0, 2.0, "A"), (6.0, 6.0, "D")])
            .expect("valid");
        assert_eq!(set.depot().label(), "E");
        let labels: Vec<&str> = set.points().iter().map(Point::label).collect();
        assert_eq!(labels, vec!["E", "A", "D"]);
        for (i, p) in set.points().iter().enumerate() {
            assert_eq!(p.index(), i);
        }
    }

    #[test]
    fn test_point_set_too_small() {
        let empty: Vec<(f64, f64, &str)> = Vec::new();
        assert!(matches!(PointSet::new(empty), Err(Error::InvalidInput(_))));
        assert!(matches!(
            PointSet::new([(0.0, 0.0, "A")]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_point_set_duplicate_coordinates() {
        let err = PointSet::new([(0.0, 0.0, "A"), (1.0, 0.0, "B"), (1.0, 0.0, "C")])
            .expect_err("duplicate");
        assert!(err.to_string().contains("share coordinates"));
    }

    #[test]
    fn test_point_set_negative_zero_is_duplicate() {
        assert!(PointSet::new([(0.0, 0.0, "A"), (-0.0, 0.0, "B")]).is_err());
    }

    #[test]
    fn test_point_set_non_finite() {
        assert!(PointSet::new([(0.0, 0.0, "A"), (f64::NAN, 1.0, "B")]).is_err());
        assert!(PointSet::new([(0.0, f64::INFINITY, "A"), (1.0, 1.0, "B")]).is_err());
    }

    #[test]
    fn test_label_lookup() {
        let set = PointSet::new([(0.0, 0.0, "A"), (1.0, 0.0, "B")]).expect("valid");
        assert_eq!(set.label(1), "B");
        assert_eq!(set.label(7), "?");
        assert!(set.get(7).is_none());
        assert!(!set.is_empty());
    }
}
