//! Polygon analysis of a closed treasure path.
//!
//! The path is treated as a rectilinear lattice polygon. Its corners come from
//! changes in movement direction, the enclosed area from the shoelace formula,
//! and the number of buried treasures (interior lattice points) from Pick's
//! theorem: `A = I + B/2 - 1`.

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::path::{Coordinate, Path};

/// Everything the analyzer learns about one path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolygonAnalysis {
    pub vertices: Vec<Coordinate>,
    pub area: u64,
    /// Lattice points on the boundary, i.e. the number of unit edges walked.
    pub boundary: u64,
    pub treasures: u64,
}

/// Corners of the polygon traced by `path`.
///
/// A coordinate is a corner when the edge leaving it points another way than
/// the edge entering it. The first coordinate is compared against the closing
/// edge, so it is listed first when the path turns there.
///
/// # Errors
///
/// Returns [`MapError::PathTooShort`] when the path has no edges.
pub fn vertices(path: &Path) -> Result<Vec<Coordinate>, MapError> {
    let coords = path.coordinates();
    let edge_total = path.edge_count();
    if edge_total == 0 {
        return Err(MapError::PathTooShort { len: coords.len() });
    }

    let edge = |k: usize| coords[k].delta_to(coords[k + 1]);
    let corners: Vec<Coordinate> = (0..edge_total)
        .filter(|&k| edge((k + edge_total - 1) % edge_total) != edge(k))
        .map(|k| coords[k])
        .collect();

    log::debug!("found {} corner(s) on a path of {}", corners.len(), coords.len());
    for corner in &corners {
        log::trace!("corner at {corner}");
    }
    Ok(corners)
}

/// Shoelace area of the polygon with the given ordered corners.
///
/// Fewer than three corners enclose nothing and give 0.
#[must_use]
pub fn polygon_area(vertices: &[Coordinate]) -> u64 {
    let n = vertices.len();
    let twice_signed: i128 = (0..n)
        .map(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            i128::from(a.row) * i128::from(b.col) - i128::from(b.row) * i128::from(a.col)
        })
        .sum();
    u64::try_from(twice_signed.unsigned_abs() / 2).unwrap_or(u64::MAX)
}

/// Interior lattice points from Pick's theorem, `I = A - B/2 + 1`.
///
/// The half is truncated toward zero. Degenerate shapes that would give a
/// negative count report 0.
#[must_use]
pub fn interior_points(area: u64, boundary: u64) -> u64 {
    let doubled = 2 * i128::from(area) - i128::from(boundary) + 2;
    u64::try_from(doubled / 2).unwrap_or(0)
}

/// Run corner extraction, shoelace area and Pick's theorem over `path`.
///
/// # Errors
///
/// Returns [`MapError::PathTooShort`] when the path has no edges.
pub fn analyze(path: &Path) -> Result<PolygonAnalysis, MapError> {
    if !path.is_closed() {
        log::warn!(
            "path from {} ends at {}; area of an open path is not meaningful",
            path.start(),
            path.end()
        );
    }
    let vertices = vertices(path)?;
    let area = polygon_area(&vertices);
    let boundary = u64::try_from(path.edge_count()).unwrap_or(u64::MAX);
    let treasures = interior_points(area, boundary);
    log::debug!("area {area}, boundary {boundary}, treasures {treasures}");
    Ok(PolygonAnalysis {
        vertices,
        area,
        boundary,
        treasures,
    })
}
