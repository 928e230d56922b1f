//! Character map rendering for normalized paths.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

use crate::error::MapError;
use crate::normalize::{MapSize, NormalizedPath, normalize};
use crate::numbers::{i64_from_index, index_from_i64};
use crate::path::{Coordinate, Path};

/// Largest number of cells [`render`] will allocate.
pub const MAX_GRID_CELLS: usize = 1 << 24;

/// Markers used when drawing a map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "RenderConfig::default_empty")]
    pub empty: char,
    #[serde(default = "RenderConfig::default_visited")]
    pub visited: char,
}

impl RenderConfig {
    const fn default_empty() -> char {
        '.'
    }

    const fn default_visited() -> char {
        'x'
    }

    /// Load render markers from JSON, filling in defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the markers are invalid.
    pub fn from_json(json: &str) -> Result<Self, RenderConfigError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the two markers can be told apart on a drawn map.
    ///
    /// # Errors
    ///
    /// Returns an error if a marker is whitespace or both markers are equal.
    pub fn validate(&self) -> Result<(), RenderConfigError> {
        for (field, marker) in [("empty", self.empty), ("visited", self.visited)] {
            if marker.is_whitespace() || marker.is_control() {
                return Err(RenderConfigError::InvisibleMarker { field, marker });
            }
        }
        if self.empty == self.visited {
            return Err(RenderConfigError::IdenticalMarkers(self.empty));
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            empty: Self::default_empty(),
            visited: Self::default_visited(),
        }
    }
}

/// Errors raised when a render configuration cannot be used.
#[derive(Debug, Error)]
pub enum RenderConfigError {
    #[error("render config is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{field} marker {marker:?} would not be visible on the map")]
    InvisibleMarker { field: &'static str, marker: char },
    #[error("empty and visited markers are both {0:?}")]
    IdenticalMarkers(char),
}

/// A drawn map: `size.height` rows of `size.width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreasureGrid {
    cells: Vec<Vec<char>>,
    visited: char,
}

impl TreasureGrid {
    #[must_use]
    pub fn size(&self) -> MapSize {
        MapSize {
            height: self.cells.len(),
            width: self.cells.first().map_or(0, Vec::len),
        }
    }

    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Rows as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| row.iter().collect())
    }

    /// Every cell carrying the visited marker, as normalized coordinates.
    #[must_use]
    pub fn visited_cells(&self) -> BTreeSet<Coordinate> {
        let visited = self.visited;
        self.cells
            .iter()
            .enumerate()
            .flat_map(move |(r, row)| {
                row.iter()
                    .enumerate()
                    .filter(move |&(_, cell)| *cell == visited)
                    .map(move |(c, _)| Coordinate::new(i64_from_index(r), i64_from_index(c)))
            })
            .collect()
    }
}

impl fmt::Display for TreasureGrid {
    /// Rows joined by `\n`, without a trailing newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            f.write_str(&row)?;
        }
        Ok(())
    }
}

/// Draw `path` on a grid exactly bounding it.
///
/// # Errors
///
/// Returns [`MapError::CoordinateOverflow`] if the path is too large to index,
/// or [`MapError::MapTooLarge`] if the grid would exceed [`MAX_GRID_CELLS`].
pub fn render(path: &NormalizedPath, cfg: &RenderConfig) -> Result<TreasureGrid, MapError> {
    let MapSize { height, width } = path.size()?;
    if height
        .checked_mul(width)
        .is_none_or(|cells| cells > MAX_GRID_CELLS)
    {
        return Err(MapError::MapTooLarge { height, width });
    }
    let mut cells = vec![vec![cfg.empty; width]; height];

    for coord in path.path() {
        let row = index_from_i64(coord.row)?;
        let col = index_from_i64(coord.col)?;
        cells[row][col] = cfg.visited;
    }

    log::debug!("rendered {height}x{width} map");
    Ok(TreasureGrid {
        cells,
        visited: cfg.visited,
    })
}

/// Normalize and draw a raw traced path in one go.
///
/// # Errors
///
/// See [`render`].
pub fn render_path(path: &Path, cfg: &RenderConfig) -> Result<TreasureGrid, MapError> {
    render(&normalize(path), cfg)
}
