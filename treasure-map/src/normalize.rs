//! Translating a path into non-negative grid coordinates.

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::numbers::index_from_i64;
use crate::path::{Coordinate, Path};

/// Height and width of the smallest grid holding a normalized path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSize {
    pub height: usize,
    pub width: usize,
}

/// A path shifted so its smallest row and column are both zero.
///
/// Only [`normalize`] builds this type, so every coordinate is known to be
/// non-negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedPath {
    offset: Coordinate,
    path: Path,
}

impl NormalizedPath {
    /// Minimum row and column of the original path; adding it back restores
    /// the original coordinates.
    #[must_use]
    pub const fn offset(&self) -> Coordinate {
        self.offset
    }

    #[must_use]
    pub const fn path(&self) -> &Path {
        &self.path
    }

    /// Split into the offset and the shifted path.
    #[must_use]
    pub fn into_parts(self) -> (Coordinate, Path) {
        (self.offset, self.path)
    }

    /// Map a normalized coordinate back to the original frame.
    #[must_use]
    pub const fn to_original(&self, coord: Coordinate) -> Coordinate {
        Coordinate::new(coord.row + self.offset.row, coord.col + self.offset.col)
    }

    /// `(max row + 1, max col + 1)` over the normalized coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::CoordinateOverflow`] if the extent does not fit in
    /// `usize`.
    pub fn size(&self) -> Result<MapSize, MapError> {
        let (max_row, max_col) = self
            .path
            .iter()
            .fold((0, 0), |(r, c), p| (r.max(p.row), c.max(p.col)));
        Ok(MapSize {
            height: index_from_i64(max_row)?.saturating_add(1),
            width: index_from_i64(max_col)?.saturating_add(1),
        })
    }
}

/// Shift `path` by its minimum row and column.
///
/// Both minima come from the original path in a single pass before any
/// coordinate is moved.
#[must_use]
pub fn normalize(path: &Path) -> NormalizedPath {
    let first = path.start();
    let (min_row, min_col) = path
        .iter()
        .fold((first.row, first.col), |(r, c), p| (r.min(p.row), c.min(p.col)));

    let shifted = path.map_coordinates(|p| Coordinate::new(p.row - min_row, p.col - min_col));

    log::debug!("normalized path by offset ({min_row}, {min_col})");
    NormalizedPath {
        offset: Coordinate::new(min_row, min_col),
        path: shifted,
    }
}
