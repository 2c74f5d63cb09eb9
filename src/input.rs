//! Point set sources: JSON files, seeded random instances and the built-in
//! demo instance.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::models::PointSet;

/// One entry of a JSON point file.
#[derive(Debug, Clone, Deserialize)]
struct PointRecord {
    x: f64,
    y: f64,
    label: String,
}

/// Parses a JSON array of `{ "x": .., "y": .., "label": .. }` objects.
///
/// The first entry becomes the depot.
///
/// # Examples
///
/// ```
/// use u_tour::input::parse_points;
///
/// let points = parse_points(r#"[
///     { "x": 0, "y": 2, "label": "Post office" },
///     { "x": 2, "y": 5, "label": "Griboedova St." }
/// ]"#).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points.depot().label(), "Post office");
/// ```
pub fn parse_points(json: &str) -> Result<PointSet> {
    let records: Vec<PointRecord> = serde_json::from_str(json)?;
    PointSet::new(records.into_iter().map(|r| (r.x, r.y, r.label)))
}

/// Reads and parses a JSON point file.
pub fn load_points(path: &Path) -> Result<PointSet> {
    let json = fs::read_to_string(path)?;
    let points = parse_points(&json)?;
    log::debug!("input: loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

/// Generates `n` distinct points on the integer grid `[0, extent)²`.
///
/// The same `seed` always yields the same instance. Labels are `P0`,
/// `P1`, ... in generation order.
///
/// # Examples
///
/// ```
/// use u_tour::input::random_points;
///
/// let a = random_points(6, 20, 7).unwrap();
/// let b = random_points(6, 20, 7).unwrap();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 6);
/// assert!(random_points(5, 2, 7).is_err()); // only 4 grid cells
/// ```
pub fn random_points(n: usize, extent: u32, seed: u64) -> Result<PointSet> {
    let cells = u64::from(extent) * u64::from(extent);
    if n as u64 > cells {
        return Err(Error::invalid_input(format!(
            "cannot place {n} distinct points on a {extent}x{extent} grid"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut taken = HashSet::with_capacity(n);
    let mut entries = Vec::with_capacity(n);
    while entries.len() < n {
        let x = rng.random_range(0..extent);
        let y = rng.random_range(0..extent);
        if taken.insert((x, y)) {
            let label = format!("P{}", entries.len());
            entries.push((f64::from(x), f64::from(y), label));
        }
    }
    PointSet::new(entries)
}

/// The five-stop post office instance.
pub fn demo_points() -> PointSet {
    let entries = [
        (0.0, 2.0, "Post office"),
        (2.0, 5.0, "Griboedova St."),
        (5.0, 2.0, "Baker St."),
        (6.0, 6.0, "Bolshaya Sadovaya St."),
        (8.0, 3.0, "Evergreen Terrace"),
    ];
    PointSet::new(entries).expect("demo instance has distinct finite points")
}
