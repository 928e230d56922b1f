//! Error types shared by the treasure map engine.

use thiserror::Error;

/// Errors raised while reading instructions or analyzing a traced path.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("invalid instruction: unknown direction {symbol:?}")]
    InvalidDirection { symbol: String },
    #[error("line {line}: expected `<direction> <steps>`, got {content:?}")]
    MalformedLine { line: usize, content: String },
    #[error("line {line}: step count {value:?} is not a non-negative integer")]
    InvalidStepCount { line: usize, value: String },
    #[error("line {line}")]
    Line {
        line: usize,
        #[source]
        source: Box<MapError>,
    },
    #[error("a path needs at least one coordinate")]
    EmptyPath,
    #[error("path of {len} coordinate(s) has no edges to analyze")]
    PathTooShort { len: usize },
    #[error("coordinate {value} does not fit on a map grid")]
    CoordinateOverflow { value: i64 },
    #[error("a {height}x{width} map is too large to draw")]
    MapTooLarge { height: usize, width: usize },
}

impl MapError {
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::MalformedLine { content, .. } => Self::MalformedLine { line, content },
            Self::InvalidStepCount { value, .. } => Self::InvalidStepCount { line, value },
            other => Self::Line {
                line,
                source: Box::new(other),
            },
        }
    }
}
