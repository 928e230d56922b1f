//! Movement instructions and the line-oriented map format.
//!
//! A map file holds one instruction per line, `<direction> <steps>`, e.g.
//!
//! ```text
//! U 2
//! R 2
//! D 2
//! L 2
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MapError;

/// One of the four compass moves on the map grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Unit step as `(row, col)` delta. Rows grow downwards.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Up => 'U',
            Self::Down => 'D',
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = MapError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'U' => Ok(Self::Up),
            'D' => Ok(Self::Down),
            'L' => Ok(Self::Left),
            'R' => Ok(Self::Right),
            other => Err(MapError::InvalidDirection {
                symbol: other.to_string(),
            }),
        }
    }
}

impl FromStr for Direction {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(MapError::InvalidDirection {
                symbol: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Straight-line movement: `steps` unit moves towards `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Instruction {
    pub direction: Direction,
    pub steps: u32,
}

impl Instruction {
    #[must_use]
    pub const fn new(direction: Direction, steps: u32) -> Self {
        Self { direction, steps }
    }
}

impl From<(Direction, u32)> for Instruction {
    fn from((direction, steps): (Direction, u32)) -> Self {
        Self::new(direction, steps)
    }
}

impl FromStr for Instruction {
    type Err = MapError;

    /// Parse a single `<direction> <steps>` line. Line numbers in errors are 0
    /// here; [`parse_instructions`] fills them in.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let (Some(direction), Some(steps), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(MapError::MalformedLine {
                line: 0,
                content: s.trim().to_string(),
            });
        };
        let direction = direction.parse()?;
        let steps = steps.parse().map_err(|_| MapError::InvalidStepCount {
            line: 0,
            value: steps.to_string(),
        })?;
        Ok(Self { direction, steps })
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.direction, self.steps)
    }
}

/// Parse a whole map, skipping blank lines.
///
/// # Errors
///
/// Returns the first malformed line, tagged with its 1-based line number.
pub fn parse_instructions(text: &str) -> Result<Vec<Instruction>, MapError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            line.parse::<Instruction>()
                .map_err(|err| err.at_line(idx + 1))
        })
        .collect()
}

/// Total number of unit moves a list of instructions makes.
#[must_use]
pub fn total_steps(instructions: &[Instruction]) -> u64 {
    instructions.iter().map(|i| u64::from(i.steps)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_square() {
        let parsed = parse_instructions("U 2\nR 2\nD 2\nL 2").unwrap();
        assert_eq!(
            parsed,
            vec![
                Instruction::new(Direction::Up, 2),
                Instruction::new(Direction::Right, 2),
                Instruction::new(Direction::Down, 2),
                Instruction::new(Direction::Left, 2),
            ]
        );
        assert_eq!(total_steps(&parsed), 8);
    }

    #[test]
    fn skips_blank_lines_and_surrounding_space() {
        let parsed = parse_instructions("\n  U 3  \n\nL\t1\n").unwrap();
        assert_eq!(
            parsed,
            vec![
                Instruction::new(Direction::Up, 3),
                Instruction::new(Direction::Left, 1)
            ]
        );
    }

    #[test]
    fn reports_unknown_direction_with_line() {
        let err = parse_instructions("U 1\n\nX 4").unwrap_err();
        assert_eq!(
            err,
            MapError::Line {
                line: 3,
                source: Box::new(MapError::InvalidDirection {
                    symbol: "X".to_string()
                }),
            }
        );
    }

    #[test]
    fn reports_bad_step_counts() {
        let err = parse_instructions("R two").unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidStepCount {
                line: 1,
                value: "two".to_string()
            }
        );
        assert!(matches!(
            parse_instructions("R -3").unwrap_err(),
            MapError::InvalidStepCount { line: 1, .. }
        ));
    }

    #[test]
    fn reports_wrong_field_count() {
        assert!(matches!(
            parse_instructions("U").unwrap_err(),
            MapError::MalformedLine { line: 1, .. }
        ));
        assert!(matches!(
            parse_instructions("U 1\nU 1 2").unwrap_err(),
            MapError::MalformedLine { line: 2, .. }
        ));
    }

    #[test]
    fn lowercase_letters_are_rejected() {
        assert!("u".parse::<Direction>().is_err());
        assert!("UP".parse::<Direction>().is_err());
    }

    #[test]
    fn display_matches_file_format() {
        let line = Instruction::new(Direction::Left, 11).to_string();
        assert_eq!(line, "L 11");
        assert_eq!(line.parse::<Instruction>().unwrap().steps, 11);
    }

    #[test]
    fn deltas_are_unit_steps() {
        for direction in Direction::ALL {
            let (dr, dc) = direction.delta();
            assert_eq!(dr.abs() + dc.abs(), 1);
            assert_eq!(Direction::try_from(direction.symbol()), Ok(direction));
        }
    }
}
