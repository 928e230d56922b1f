//! One-shot survey of a treasure map: trace, normalize and analyze.

use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::instruction::Instruction;
use crate::normalize::{MapSize, NormalizedPath, normalize};
use crate::path::{Coordinate, Path, trace};
use crate::polygon::{PolygonAnalysis, analyze};
use crate::render::{RenderConfig, TreasureGrid, render};

/// Summary of one map, ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Survey {
    pub instructions: usize,
    pub path_length: usize,
    pub closed: bool,
    pub offset: Coordinate,
    pub size: MapSize,
    /// Absent when the path never leaves its start, so there is no polygon.
    #[serde(flatten)]
    pub polygon: Option<PolygonAnalysis>,
}

impl Survey {
    #[must_use]
    pub fn treasures(&self) -> Option<u64> {
        self.polygon.as_ref().map(|p| p.treasures)
    }
}

/// Traced and normalized path kept alongside its survey so it can be drawn.
#[derive(Debug, Clone)]
pub struct SurveyedMap {
    pub path: Path,
    pub normalized: NormalizedPath,
    pub survey: Survey,
}

impl SurveyedMap {
    /// Draw the normalized path.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is too large to index.
    pub fn render(&self, cfg: &RenderConfig) -> Result<TreasureGrid, MapError> {
        render(&self.normalized, cfg)
    }
}

/// Run the whole pipeline over `instructions`.
///
/// A path without edges is still surveyed and can be drawn; it just has no
/// polygon.
///
/// # Errors
///
/// Returns [`MapError::CoordinateOverflow`] for paths too large to grid.
pub fn survey(instructions: &[Instruction]) -> Result<SurveyedMap, MapError> {
    let path = trace(instructions);
    let normalized = normalize(&path);
    let size = normalized.size()?;
    let polygon = match analyze(&path) {
        Ok(analysis) => Some(analysis),
        Err(MapError::PathTooShort { len }) => {
            log::info!("path of {len} coordinate(s) encloses nothing; skipping analysis");
            None
        }
        Err(err) => return Err(err),
    };
    let survey = Survey {
        instructions: instructions.len(),
        path_length: path.len(),
        closed: path.is_closed(),
        offset: normalized.offset(),
        size,
        polygon,
    };
    Ok(SurveyedMap {
        path,
        normalized,
        survey,
    })
}
