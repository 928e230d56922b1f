//! Treasure Map Engine
//!
//! Turns a pirate treasure map, a list of `<direction> <steps>` instructions,
//! into a lattice path, draws it as a character map and counts the treasures
//! buried inside it. Pure, synchronous and free of I/O; reading and writing
//! map files is left to callers such as `treasure-cli`.

pub mod error;
pub mod instruction;
pub mod normalize;
pub mod numbers;
pub mod path;
pub mod polygon;
pub mod render;
pub mod survey;

// Re-export commonly used types
pub use error::MapError;
pub use instruction::{Direction, Instruction, parse_instructions, total_steps};
pub use normalize::{MapSize, NormalizedPath, normalize};
pub use path::{Coordinate, Path, trace, trace_symbols};
pub use polygon::{PolygonAnalysis, analyze, interior_points, polygon_area, vertices};
pub use render::{RenderConfig, RenderConfigError, TreasureGrid, render, render_path};
pub use survey::{Survey, SurveyedMap, survey};
