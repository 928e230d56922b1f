//! Built-in treasure maps for trying the tool without a map file.

use anyhow::Result;
use treasure_map::{Instruction, parse_instructions};

pub struct SampleMap {
    pub name: &'static str,
    pub description: &'static str,
    pub text: &'static str,
}

impl SampleMap {
    pub fn instructions(&self) -> Result<Vec<Instruction>> {
        Ok(parse_instructions(self.text)?)
    }
}

pub const SAMPLES: [SampleMap; 3] = [
    SampleMap {
        name: "treasure",
        description: "Nine-leg island map, 42 treasures",
        text: "U 2\nR 2\nD 2\nR 2\nU 4\nL 11\nD 7\nR 7\nU 3\n",
    },
    SampleMap {
        name: "rectangle",
        description: "2x4 rectangle walked with a repeated direction",
        text: "U 2\nR 2\nR 2\nD 2\nL 4\n",
    },
    SampleMap {
        name: "square",
        description: "Smallest map with a buried treasure",
        text: "U 2\nR 2\nD 2\nL 2\n",
    },
];

pub fn find_sample(name: &str) -> Option<&'static SampleMap> {
    SAMPLES
        .iter()
        .find(|sample| sample.name.eq_ignore_ascii_case(name.trim()))
}

pub fn list_samples() -> impl Iterator<Item = (&'static str, &'static str)> {
    SAMPLES.iter().map(|s| (s.name, s.description))
}
