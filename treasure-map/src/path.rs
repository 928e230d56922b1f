//! Lattice coordinates and the path traced by a list of instructions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MapError;
use crate::instruction::{Direction, Instruction, total_steps};

/// A grid point as `(row, col)`. Rows grow downwards, columns to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Coordinate {
    pub row: i64,
    pub col: i64,
}

impl Coordinate {
    pub const ORIGIN: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self::new(self.row + dr, self.col + dc)
    }

    /// Difference `other - self`.
    #[must_use]
    pub const fn delta_to(self, other: Self) -> (i64, i64) {
        (other.row - self.row, other.col - self.col)
    }
}

impl From<(i64, i64)> for Coordinate {
    fn from((row, col): (i64, i64)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i64, i64) {
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Ordered, non-empty list of coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Path {
    coords: Vec<Coordinate>,
}

#[allow(clippy::len_without_is_empty)]
impl Path {
    /// Wrap an existing coordinate list.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EmptyPath`] when `coords` is empty.
    pub fn from_coordinates(coords: Vec<Coordinate>) -> Result<Self, MapError> {
        if coords.is_empty() {
            return Err(MapError::EmptyPath);
        }
        Ok(Self { coords })
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coords
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[must_use]
    pub fn start(&self) -> Coordinate {
        self.coords[0]
    }

    #[must_use]
    pub fn end(&self) -> Coordinate {
        self.coords[self.coords.len() - 1]
    }

    /// Number of unit edges walked, i.e. boundary points of a closed path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.coords.len() - 1
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.start() == self.end()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coords.iter()
    }

    /// Apply `f` to every coordinate, keeping order and length.
    #[must_use]
    pub fn map_coordinates(&self, f: impl FnMut(Coordinate) -> Coordinate) -> Self {
        Self {
            coords: self.coords.iter().copied().map(f).collect(),
        }
    }
}

impl TryFrom<Vec<Coordinate>> for Path {
    type Error = MapError;

    fn try_from(coords: Vec<Coordinate>) -> Result<Self, Self::Error> {
        Self::from_coordinates(coords)
    }
}

impl From<Path> for Vec<Coordinate> {
    fn from(path: Path) -> Self {
        path.coords
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coords.iter()
    }
}

/// Walk `instructions` from the origin one unit step at a time.
///
/// The result always starts at (0, 0) and holds `1 + sum(steps)` coordinates.
#[must_use]
pub fn trace(instructions: &[Instruction]) -> Path {
    let capacity = usize::try_from(total_steps(instructions))
        .unwrap_or(0)
        .saturating_add(1);
    let mut coords = Vec::with_capacity(capacity);
    let mut cursor = Coordinate::ORIGIN;
    coords.push(cursor);

    for instruction in instructions {
        for _ in 0..instruction.steps {
            cursor = cursor.step(instruction.direction);
            coords.push(cursor);
        }
    }

    log::debug!(
        "traced {} instruction(s) into {} coordinate(s), ending at {cursor}",
        instructions.len(),
        coords.len()
    );
    Path { coords }
}

/// Like [`trace`], but for raw `(symbol, steps)` pairs as read from a map.
///
/// # Errors
///
/// Returns [`MapError::InvalidDirection`] for the first unknown symbol; no
/// partial path is produced.
pub fn trace_symbols(raw: &[(char, u32)]) -> Result<Path, MapError> {
    let instructions = raw
        .iter()
        .map(|&(symbol, steps)| Direction::try_from(symbol).map(|d| Instruction::new(d, steps)))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(trace(&instructions))
}
