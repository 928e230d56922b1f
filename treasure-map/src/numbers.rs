//! Checked conversions between signed map coordinates and grid indices.

use num_traits::cast::cast;

use crate::error::MapError;

/// Convert a non-negative coordinate into a grid index.
///
/// # Errors
///
/// Returns [`MapError::CoordinateOverflow`] when `value` is negative or does
/// not fit in `usize`.
pub fn index_from_i64(value: i64) -> Result<usize, MapError> {
    cast::<i64, usize>(value).ok_or(MapError::CoordinateOverflow { value })
}

/// Convert a grid index back into a coordinate, saturating at `i64::MAX`.
#[must_use]
pub fn i64_from_index(index: usize) -> i64 {
    cast::<usize, i64>(index).unwrap_or(i64::MAX)
}
