use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use treasure_map::{Instruction, MapError, RenderConfig, Survey, parse_instructions, survey};

use crate::samples::{SampleMap, find_sample};

/// Where a run reads its instructions from.
#[derive(Debug, Clone)]
pub enum MapSource {
    File(PathBuf),
    Sample(&'static str),
}

impl MapSource {
    /// Pick the source from `--input` / `--sample`; a file wins when both are
    /// somehow present.
    pub fn resolve(input: Option<&Path>, sample: Option<&str>) -> Result<Self> {
        match (input, sample) {
            (Some(path), _) => Ok(Self::File(path.to_path_buf())),
            (None, Some(name)) => find_sample(name)
                .map(|s| Self::Sample(s.name))
                .ok_or_else(|| anyhow!("unknown sample map '{name}' (try --list-samples)")),
            (None, None) => Err(anyhow!("no map given: pass --input <FILE> or --sample <NAME>")),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Sample(name) => format!("sample:{name}"),
        }
    }

    pub fn load(&self) -> Result<Vec<Instruction>> {
        match self {
            Self::File(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read map {}", path.display()))?;
                parse_instructions(&text)
                    .with_context(|| format!("failed to parse map {}", path.display()))
            }
            Self::Sample(name) => find_sample(name)
                .map(SampleMap::instructions)
                .unwrap_or_else(|| Err(anyhow!("unknown sample map '{name}'"))),
        }
    }
}

/// Result of surveying and drawing one map.
#[derive(Debug, Clone, Serialize)]
pub struct MapRun {
    pub source: String,
    #[serde(flatten)]
    pub survey: Survey,
    /// `None` when the map is too large to draw.
    pub map: Option<String>,
}

impl MapRun {
    pub fn execute(source: &MapSource, render_cfg: &RenderConfig) -> Result<Self> {
        let label = source.label();
        let instructions = source.load()?;
        log::info!("loaded {} instruction(s) from {label}", instructions.len());

        let surveyed =
            survey(&instructions).with_context(|| format!("failed to survey map {label}"))?;
        let map = match surveyed.render(render_cfg) {
            Ok(grid) => Some(grid.to_string()),
            Err(err @ MapError::MapTooLarge { .. }) => {
                log::warn!("not drawing {label}: {err}");
                None
            }
            Err(err) => return Err(err).with_context(|| format!("failed to draw map {label}")),
        };

        Ok(Self {
            source: label,
            survey: surveyed.survey,
            map,
        })
    }
}

pub fn load_render_config(path: Option<&Path>) -> Result<RenderConfig> {
    let Some(path) = path else {
        return Ok(RenderConfig::default());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read render config {}", path.display()))?;
    RenderConfig::from_json(&json)
        .with_context(|| format!("invalid render config {}", path.display()))
}

/// Write the drawn map to `path`, exactly as rendered.
pub fn write_map_file(path: &Path, map: &str) -> Result<()> {
    fs::write(path, map).with_context(|| format!("failed to write map {}", path.display()))
}
