mod logic;
mod samples;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use logic::reports::{
    ReportOptions, generate_console_report, generate_json_report, generate_markdown_report,
};
use logic::{MapRun, MapSource, load_render_config, write_map_file};
use samples::list_samples;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored summary for the terminal
    Console,
    /// Machine-readable survey
    Json,
    /// Markdown summary with the map in a code block
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "treasure-cli", version)]
#[command(about = "Draw pirate treasure maps and count the treasures they enclose")]
struct Args {
    /// Map file with one `<direction> <steps>` instruction per line (U, D, L, R)
    #[arg(long, conflicts_with = "sample")]
    input: Option<PathBuf>,

    /// Built-in sample map to survey instead of a file
    #[arg(long)]
    sample: Option<String>,

    /// List the built-in sample maps and exit
    #[arg(long)]
    list_samples: bool,

    /// Write the drawn map to this file instead of the report
    #[arg(long)]
    map_output: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON file overriding the map markers, e.g. {"empty": ".", "visited": "x"}
    #[arg(long)]
    config: Option<PathBuf>,

    /// Include the polygon vertices in the report
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if maybe_list_samples(&args)? {
        return Ok(());
    }

    if args.report == ReportFormat::Console && args.output.is_none() {
        announce_banner();
    }

    let source = MapSource::resolve(args.input.as_deref(), args.sample.as_deref())?;
    let render_cfg = load_render_config(args.config.as_deref())?;
    let run = MapRun::execute(&source, &render_cfg)?;

    if let Some(path) = &args.map_output {
        let Some(map) = &run.map else {
            bail!("{} is too large to draw into {}", run.source, path.display());
        };
        write_map_file(path, map)?;
        log::info!("wrote map to {}", path.display());
    }

    write_report(&args, &run)
}

fn maybe_list_samples(args: &Args) -> Result<bool> {
    if !args.list_samples {
        return Ok(false);
    }
    let mut output_target = OutputTarget::open(args.output.as_deref())?;
    writeln!(output_target, "Available sample maps:")?;
    for (name, description) in list_samples() {
        writeln!(output_target, "  {name:12} - {description}")?;
    }
    output_target.flush()?;
    Ok(true)
}

fn announce_banner() {
    println!("{}", "🏴‍☠️ Treasure Map Surveyor".bright_cyan().bold());
    println!("{}", "==========================".cyan());
}

fn report_options(args: &Args) -> ReportOptions {
    ReportOptions {
        show_map: args.map_output.is_none(),
        show_vertices: args.verbose,
    }
}

fn write_report(args: &Args, run: &MapRun) -> Result<()> {
    let mut output_target = OutputTarget::open(args.output.as_deref())?;
    let options = report_options(args);

    match args.report {
        ReportFormat::Json => generate_json_report(&mut output_target, run)?,
        ReportFormat::Markdown => generate_markdown_report(&mut output_target, run, options)?,
        ReportFormat::Console => generate_console_report(&mut output_target, run, options)?,
    }

    output_target.flush()?;
    Ok(())
}

/// Buffered destination for `--output`, falling back to stdout.
enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn open(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::Stdout(BufWriter::new(stdout())));
        };
        let file = File::create(path)
            .with_context(|| format!("failed to create report {}", path.display()))?;
        Ok(Self::File(BufWriter::new(file)))
    }

    fn sink(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.sink().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.sink().flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use treasure_map::RenderConfig;

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "treasure-main-{label}-{}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos()
        ))
    }

    fn base_args() -> Args {
        Args {
            input: None,
            sample: Some("square".to_string()),
            list_samples: false,
            map_output: None,
            report: ReportFormat::Console,
            output: None,
            config: None,
            verbose: false,
        }
    }

    fn square_run() -> MapRun {
        MapRun::execute(&MapSource::Sample("square"), &RenderConfig::default()).unwrap()
    }

    #[test]
    fn args_parse_defaults() {
        let args = Args::try_parse_from(["treasure-cli", "--sample", "treasure"]).unwrap();
        assert_eq!(args.report, ReportFormat::Console);
        assert_eq!(args.sample.as_deref(), Some("treasure"));
        assert!(!args.verbose);
    }

    #[test]
    fn input_and_sample_conflict() {
        let parsed =
            Args::try_parse_from(["treasure-cli", "--input", "a.txt", "--sample", "square"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn map_output_hides_map_from_report() {
        let mut args = base_args();
        assert!(report_options(&args).show_map);
        args.map_output = Some(PathBuf::from("map.txt"));
        args.verbose = true;
        let options = report_options(&args);
        assert!(!options.show_map);
        assert!(options.show_vertices);
    }

    #[test]
    fn write_report_emits_json_output() {
        let mut args = base_args();
        let output = temp_path("json");
        args.report = ReportFormat::Json;
        args.output = Some(output.clone());
        write_report(&args, &square_run()).unwrap();
        let content = std::fs::read_to_string(output).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["path_length"], 9);
    }

    #[test]
    fn write_report_emits_markdown_output() {
        let mut args = base_args();
        let output = temp_path("md");
        args.report = ReportFormat::Markdown;
        args.output = Some(output.clone());
        write_report(&args, &square_run()).unwrap();
        let content = std::fs::read_to_string(output).unwrap();
        assert!(content.contains("## Map"));
    }

    #[test]
    fn maybe_list_samples_writes_output() {
        let mut args = base_args();
        let output = temp_path("list");
        args.list_samples = true;
        args.output = Some(output.clone());
        assert!(maybe_list_samples(&args).unwrap());
        let content = std::fs::read_to_string(output).unwrap();
        assert!(content.contains("Available sample maps"));
        assert!(content.contains("rectangle"));
    }

    #[test]
    fn maybe_list_samples_returns_false_when_disabled() {
        assert!(!maybe_list_samples(&base_args()).unwrap());
    }

    #[test]
    fn output_target_stdout_writes() {
        let mut target = OutputTarget::open(None).unwrap();
        writeln!(target, "hello").unwrap();
        target.flush().unwrap();
    }

    #[test]
    fn output_target_reports_unwritable_path() {
        let dir = temp_path("dir");
        std::fs::create_dir_all(&dir).unwrap();
        assert!(OutputTarget::open(Some(dir.as_path())).is_err());
    }
}
