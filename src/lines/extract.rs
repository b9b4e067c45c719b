//! End-to-end line extraction.
//!
//! Pipeline: peaks on the input grid, Hough voting, peaks on the
//! accumulator, then band membership of the input peaks for every candidate
//! line. An input with no peaks yields an empty detection without building an
//! accumulator.

use crate::accumulator::AccumulatorBuilder;
use crate::grid::GridView;
use crate::lines::Line;
use crate::peaks::{PeakDetector, Point};
use crate::trace::{trace_detail, trace_event, trace_span, trace_warn};
use crate::util::{HoughError, HoughResult};

/// Parameters for [`LineExtractor`].
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractConfig {
    /// Raw signal a point must exceed in the input grid.
    pub xy_threshold: f64,
    /// Peak window radius in the input grid.
    pub xy_spread: usize,
    /// Vote count a line must exceed in the accumulator.
    pub rtheta_threshold: f64,
    /// Peak window radius in the accumulator.
    pub rtheta_spread: usize,
    /// Number of r bins.
    pub r_bins: usize,
    /// Number of theta bins over `[0, pi)`.
    pub theta_bins: usize,
    /// Full width of the membership band around each line.
    pub line_width: f64,
    /// Use rayon for filters and voting (requires the `rayon` feature).
    pub parallel: bool,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            xy_threshold: 1.0,
            xy_spread: 1,
            rtheta_threshold: 5.0,
            rtheta_spread: 1,
            r_bins: 500,
            theta_bins: 500,
            line_width: 1.0,
            parallel: false,
        }
    }
}

impl ExtractConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> HoughResult<()> {
        if self.xy_threshold.is_nan() {
            return Err(HoughError::InvalidInput("xy_threshold must not be NaN"));
        }
        if self.rtheta_threshold.is_nan() {
            return Err(HoughError::InvalidInput("rtheta_threshold must not be NaN"));
        }
        if self.r_bins == 0 {
            return Err(HoughError::InvalidInput("r_bins must be > 0"));
        }
        if self.theta_bins == 0 {
            return Err(HoughError::InvalidInput("theta_bins must be > 0"));
        }
        if !(self.line_width.is_finite() && self.line_width > 0.0) {
            return Err(HoughError::InvalidInput(
                "line_width must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// Result of one extraction run.
///
/// Equality compares lines by `(r, theta)` only, see [`Line`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Detection {
    /// Peaks found in the input grid.
    pub points: Vec<Point>,
    /// Peaks found in the accumulator, in accumulator cell units.
    pub rtheta_peaks: Vec<Point>,
    /// Candidate lines with their member points.
    pub lines: Vec<Line>,
}

impl Detection {
    /// Returns true if no lines were found.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Stateless line finder over scalar grids.
#[derive(Clone, Debug, Default)]
pub struct LineExtractor {
    cfg: ExtractConfig,
}

impl LineExtractor {
    /// Creates an extractor after validating `cfg`.
    pub fn new(cfg: ExtractConfig) -> HoughResult<Self> {
        cfg.validate()?;
        Ok(Self { cfg })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &ExtractConfig {
        &self.cfg
    }

    /// Runs the full pipeline on `grid`.
    pub fn find(&self, grid: GridView<'_>) -> HoughResult<Detection> {
        let cfg = &self.cfg;
        cfg.validate()?;
        let _span = trace_span!("find_lines", width = grid.width(), height = grid.height()).entered();

        let points = PeakDetector::new(cfg.xy_threshold, cfg.xy_spread)
            .with_parallel(cfg.parallel)
            .find(grid)?;
        if points.is_empty() {
            trace_event!("no_points_found");
            return Ok(Detection::default());
        }
        trace_event!("points_found", count = points.len());

        let accumulator = AccumulatorBuilder::new(cfg.r_bins, cfg.theta_bins)?
            .with_parallel(cfg.parallel)
            .build(&points)?;
        let rtheta_peaks = PeakDetector::new(cfg.rtheta_threshold, cfg.rtheta_spread)
            .with_parallel(cfg.parallel)
            .find(accumulator.votes())?;

        let mut lines = Vec::with_capacity(rtheta_peaks.len());
        for &peak in &rtheta_peaks {
            let (r, theta) = accumulator.line_params(peak)?;
            let votes = accumulator.votes().sample_at(peak)?;
            let mut line = Line::new(r, theta)?.with_votes(votes);
            line.assign_members(&points, cfg.line_width, grid)?;
            trace_detail!(
                "line_candidate",
                r = r,
                theta = theta,
                votes = votes,
                members = line.members().len()
            );
            lines.push(line);
        }
        if lines.is_empty() {
            let max_votes = accumulator
                .grid()
                .argmax()
                .and_then(|(x, y)| accumulator.votes_at(x, y))
                .unwrap_or(0.0);
            trace_warn!(
                "no_lines_above_threshold",
                max_votes = max_votes,
                rtheta_threshold = cfg.rtheta_threshold
            );
        }

        trace_event!("lines_found", count = lines.len());
        Ok(Detection {
            points,
            rtheta_peaks,
            lines,
        })
    }
}
