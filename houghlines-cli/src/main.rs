use clap::Parser;
use houghlines::{Detection, ExtractConfig, Line, LineExtractor, Point, ScalarGrid};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const SCHEMA_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.schema.json"));
const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Hough line finder (JSON config driven)")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "config.json")]
    config: PathBuf,
    /// Print the JSON schema and exit.
    #[arg(long)]
    print_schema: bool,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output for the pipeline stages.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ExtractConfigJson {
    xy_threshold: f64,
    xy_spread: usize,
    rtheta_threshold: f64,
    rtheta_spread: usize,
    r_bins: usize,
    theta_bins: usize,
    line_width: f64,
    parallel: bool,
}

impl Default for ExtractConfigJson {
    fn default() -> Self {
        let cfg = ExtractConfig::default();
        Self {
            xy_threshold: cfg.xy_threshold,
            xy_spread: cfg.xy_spread,
            rtheta_threshold: cfg.rtheta_threshold,
            rtheta_spread: cfg.rtheta_spread,
            r_bins: cfg.r_bins,
            theta_bins: cfg.theta_bins,
            line_width: cfg.line_width,
            parallel: cfg.parallel,
        }
    }
}

impl From<ExtractConfigJson> for ExtractConfig {
    fn from(value: ExtractConfigJson) -> Self {
        Self {
            xy_threshold: value.xy_threshold,
            xy_spread: value.xy_spread,
            rtheta_threshold: value.rtheta_threshold,
            rtheta_spread: value.rtheta_spread,
            r_bins: value.r_bins,
            theta_bins: value.theta_bins,
            line_width: value.line_width,
            parallel: value.parallel,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Config {
    grid_path: String,
    output_path: Option<String>,
    extract: ExtractConfigJson,
}

#[derive(Debug, Serialize)]
struct PointRecord {
    x: f64,
    y: f64,
}

impl From<Point> for PointRecord {
    fn from(value: Point) -> Self {
        Self {
            x: value.x,
            y: value.y,
        }
    }
}

#[derive(Debug, Serialize)]
struct MemberRecord {
    x: f64,
    y: f64,
    signal: f64,
}

#[derive(Debug, Serialize)]
struct LineRecord {
    r: f64,
    theta: f64,
    votes: f64,
    members: Vec<MemberRecord>,
    segment: Option<[PointRecord; 2]>,
}

impl LineRecord {
    fn new(line: &Line, width: usize, height: usize) -> Self {
        Self {
            r: line.r,
            theta: line.theta,
            votes: line.votes,
            members: line
                .members()
                .iter()
                .map(|m| MemberRecord {
                    x: m.point.x,
                    y: m.point.y,
                    signal: m.signal,
                })
                .collect(),
            segment: line
                .segment_within(width, height)
                .map(|(a, b)| [a.into(), b.into()]),
        }
    }
}

#[derive(Debug, Serialize)]
struct Output {
    width: usize,
    height: usize,
    points: Vec<PointRecord>,
    /// Accumulator peaks in accumulator cell units (`x` = r bin, `y` = theta bin).
    rtheta_peaks: Vec<PointRecord>,
    lines: Vec<LineRecord>,
}

impl Output {
    fn new(grid: &ScalarGrid, detection: Detection) -> Self {
        let (width, height) = (grid.width(), grid.height());
        Self {
            width,
            height,
            lines: detection
                .lines
                .iter()
                .map(|line| LineRecord::new(line, width, height))
                .collect(),
            rtheta_peaks: detection
                .rtheta_peaks
                .into_iter()
                .map(PointRecord::from)
                .collect(),
            points: detection.points.into_iter().map(PointRecord::from).collect(),
        }
    }
}

fn load_grid(path: &Path) -> Result<ScalarGrid, Box<dyn std::error::Error>> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let rows: Vec<Vec<f64>> = serde_json::from_str(&fs::read_to_string(path)?)?;
        return Ok(ScalarGrid::from_rows(rows)?);
    }
    load_image_grid(path)
}

#[cfg(feature = "image-io")]
fn load_image_grid(path: &Path) -> Result<ScalarGrid, Box<dyn std::error::Error>> {
    Ok(houghlines::io::load_gray_grid(path)?)
}

#[cfg(not(feature = "image-io"))]
fn load_image_grid(path: &Path) -> Result<ScalarGrid, Box<dyn std::error::Error>> {
    Err(format!(
        "{} is not a .json grid and image input is disabled",
        path.display()
    )
    .into())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("houghlines=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    if cli.print_schema {
        println!("{SCHEMA_JSON}");
        return Ok(());
    }
    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let config_text = fs::read_to_string(&cli.config)?;
    let config: Config = serde_json::from_str(&config_text)?;
    if config.grid_path.is_empty() {
        return Err("grid_path must be set in the config".into());
    }

    let grid = load_grid(Path::new(&config.grid_path))?;
    tracing::info!(
        width = grid.width(),
        height = grid.height(),
        "loaded {}",
        config.grid_path
    );

    let extractor = LineExtractor::new(config.extract.into())?;
    let detection = extractor.find(grid.view())?;
    if detection.points.is_empty() {
        tracing::warn!("no points found above xy_threshold");
    }

    let output = Output::new(&grid, detection);
    let json = serde_json::to_string_pretty(&output)?;
    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
