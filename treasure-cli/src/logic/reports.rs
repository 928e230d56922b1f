use anyhow::Result;
use colored::Colorize;
use std::io::Write;

use super::MapRun;

/// What the console and markdown reports include besides the numbers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    pub show_map: bool,
    pub show_vertices: bool,
}

const NO_AREA: &str = "none (the path never moves)";
const NO_MAP: &str = "map too large to draw";

fn vertex_list(run: &MapRun) -> String {
    run.survey.polygon.as_ref().map_or_else(
        || NO_AREA.to_string(),
        |polygon| {
            polygon
                .vertices
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        },
    )
}

pub fn generate_console_report(
    out: &mut dyn Write,
    run: &MapRun,
    options: ReportOptions,
) -> Result<()> {
    let survey = &run.survey;
    writeln!(out)?;
    writeln!(out, "{}", "🗺️  Treasure Map Survey".bright_cyan().bold())?;
    writeln!(out, "{}", "======================".cyan())?;
    writeln!(out, "Source: {}", run.source.bold())?;
    writeln!(out, "Instructions: {}", survey.instructions)?;
    writeln!(out, "Path length: {}", survey.path_length)?;
    let closed = if survey.closed {
        "yes".green()
    } else {
        "no".yellow()
    };
    writeln!(out, "Closed: {closed}")?;
    writeln!(
        out,
        "Map size: {} x {}",
        survey.size.height, survey.size.width
    )?;
    match &survey.polygon {
        Some(polygon) => {
            writeln!(out, "Area: {}", polygon.area)?;
            writeln!(out, "Boundary points: {}", polygon.boundary)?;
            writeln!(
                out,
                "Treasures: {}",
                polygon.treasures.to_string().bright_yellow().bold()
            )?;
        }
        None => writeln!(out, "Area: {}", NO_AREA.yellow())?,
    }

    if options.show_vertices {
        writeln!(out, "Vertices: {}", vertex_list(run))?;
    }
    if options.show_map {
        writeln!(out)?;
        writeln!(out, "{}", run.map.as_deref().unwrap_or(NO_MAP))?;
    }
    Ok(())
}

pub fn generate_json_report(out: &mut dyn Write, run: &MapRun) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, run)?;
    writeln!(out)?;
    Ok(())
}

pub fn generate_markdown_report(
    out: &mut dyn Write,
    run: &MapRun,
    options: ReportOptions,
) -> Result<()> {
    let survey = &run.survey;
    writeln!(out, "# Treasure Map Survey\n")?;
    writeln!(out, "- **Source**: `{}`", run.source)?;
    writeln!(out, "- **Instructions**: {}", survey.instructions)?;
    writeln!(out, "- **Path length**: {}", survey.path_length)?;
    writeln!(out, "- **Closed**: {}", if survey.closed { "yes" } else { "no" })?;
    writeln!(
        out,
        "- **Map size**: {} x {}",
        survey.size.height, survey.size.width
    )?;
    if let Some(polygon) = &survey.polygon {
        writeln!(out, "- **Area**: {}", polygon.area)?;
        writeln!(out, "- **Boundary points**: {}", polygon.boundary)?;
        writeln!(out, "- **Treasures**: {}", polygon.treasures)?;
    } else {
        writeln!(out, "- **Area**: {NO_AREA}")?;
    }

    if options.show_vertices {
        writeln!(out, "\n## Vertices\n")?;
        writeln!(out, "{}", vertex_list(run))?;
    }
    if options.show_map {
        writeln!(out, "\n## Map\n")?;
        match &run.map {
            Some(map) => writeln!(out, "```text\n{map}\n```")?,
            None => writeln!(out, "_{NO_MAP}_")?,
        }
    }
    Ok(())
}
