//! Hough-space voting.
//!
//! Every point casts one vote per theta sample into the r bin of
//! `r = x cos(theta) + y sin(theta)`. The r bin edges span the observed
//! minimum and maximum r of the current point set, so the r axis origin and
//! resolution change from run to run; a peak must always be mapped back
//! through the edges of the accumulator that produced it.
//!
//! The accumulator grid is laid out with r bins along `x` and theta bins
//! along `y`.

mod theta;

pub use theta::ThetaGrid;

use crate::grid::{GridView, ScalarGrid};
use crate::peaks::Point;
use crate::trace::{trace_event, trace_span, trace_warn};
use crate::util::math::{digitize, linspace};
use crate::util::{HoughError, HoughResult};

/// Builds vote accumulators at a fixed `(r, theta)` resolution.
#[derive(Clone, Debug)]
pub struct AccumulatorBuilder {
    r_bins: usize,
    thetas: ThetaGrid,
    parallel: bool,
}

impl AccumulatorBuilder {
    /// Creates a builder; both bin counts must be positive.
    pub fn new(r_bins: usize, theta_bins: usize) -> HoughResult<Self> {
        if r_bins == 0 {
            return Err(HoughError::InvalidInput("r_bins must be > 0"));
        }
        Ok(Self {
            r_bins,
            thetas: ThetaGrid::new(theta_bins)?,
            parallel: false,
        })
    }

    /// Computes per-point r rows in parallel (requires the `rayon` feature).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Returns the number of r bins.
    pub fn r_bins(&self) -> usize {
        self.r_bins
    }

    /// Returns the theta sampling.
    pub fn thetas(&self) -> &ThetaGrid {
        &self.thetas
    }

    /// Votes all `points` into a new accumulator.
    ///
    /// An empty point set has no r range and is rejected.
    pub fn build(&self, points: &[Point]) -> HoughResult<Accumulator> {
        if points.is_empty() {
            return Err(HoughError::InvalidInput(
                "accumulator needs at least one point",
            ));
        }
        if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
            return Err(HoughError::InvalidInput("point coordinates must be finite"));
        }
        let _span = trace_span!(
            "build_accumulator",
            points = points.len(),
            r_bins = self.r_bins,
            theta_bins = self.thetas.len()
        )
        .entered();

        let trig: Vec<(f64, f64)> = self.thetas.iter().map(f64::sin_cos).collect();
        let rs = self.r_matrix(points, &trig);

        let (r_min, r_max) = rs
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| {
                (lo.min(r), hi.max(r))
            });
        if r_min == r_max {
            trace_warn!("collapsed_r_range", r = r_min, points = points.len());
        }
        let r_edges = linspace(r_min, r_max, self.r_bins);

        let theta_bins = self.thetas.len();
        let mut votes = ScalarGrid::zeros(self.r_bins, theta_bins)?;
        for (pair_idx, &r) in rs.iter().enumerate() {
            let theta_idx = pair_idx % theta_bins;
            let point = points[pair_idx / theta_bins];
            let out_of_bounds = HoughError::OutOfBoundsIndex {
                x: point.x,
                y: point.y,
                width: self.r_bins,
                height: theta_bins,
            };
            let r_idx = digitize(r, &r_edges).ok_or(out_of_bounds.clone())?;
            let cell = votes.get_mut(r_idx, theta_idx).ok_or(out_of_bounds)?;
            *cell += 1.0;
        }

        trace_event!("accumulator_built", r_min = r_min, r_max = r_max);
        Ok(Accumulator {
            votes,
            r_edges,
            thetas: self.thetas.clone(),
        })
    }

    /// Returns whether per-point r rows are computed in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Row-major `points x thetas` matrix of r values.
    #[cfg(feature = "rayon")]
    fn r_matrix(&self, points: &[Point], trig: &[(f64, f64)]) -> Vec<f64> {
        use rayon::prelude::*;

        if !self.parallel {
            return r_matrix_seq(points, trig);
        }
        let mut rs = vec![0.0; points.len() * trig.len()];
        rs.par_chunks_exact_mut(trig.len())
            .zip(points.par_iter())
            .for_each(|(row, &point)| fill_r_row(point, trig, row));
        rs
    }

    #[cfg(not(feature = "rayon"))]
    fn r_matrix(&self, points: &[Point], trig: &[(f64, f64)]) -> Vec<f64> {
        r_matrix_seq(points, trig)
    }
}

fn r_matrix_seq(points: &[Point], trig: &[(f64, f64)]) -> Vec<f64> {
    let mut rs = vec![0.0; points.len() * trig.len()];
    for (row, &point) in rs.chunks_exact_mut(trig.len()).zip(points) {
        fill_r_row(point, trig, row);
    }
    rs
}

fn fill_r_row(point: Point, trig: &[(f64, f64)], row: &mut [f64]) {
    for (out, &(sin, cos)) in row.iter_mut().zip(trig) {
        *out = point.x * cos + point.y * sin;
    }
}

/// Vote counts over `(r bin, theta bin)` together with the binning that
/// produced them.
#[derive(Clone, Debug)]
pub struct Accumulator {
    votes: ScalarGrid,
    r_edges: Vec<f64>,
    thetas: ThetaGrid,
}

impl Accumulator {
    /// Returns the vote grid (`x` = r bin, `y` = theta bin).
    pub fn votes(&self) -> GridView<'_> {
        self.votes.view()
    }

    /// Returns the owned vote grid.
    pub fn grid(&self) -> &ScalarGrid {
        &self.votes
    }

    /// Returns the r bin edges (one per r bin, both range ends included).
    pub fn r_edges(&self) -> &[f64] {
        &self.r_edges
    }

    /// Returns the spacing between r edges, zero for a single bin.
    pub fn r_step(&self) -> f64 {
        match self.r_edges.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    /// Returns the theta sampling.
    pub fn thetas(&self) -> &ThetaGrid {
        &self.thetas
    }

    /// Returns the vote count at `(r_idx, theta_idx)`.
    pub fn votes_at(&self, r_idx: usize, theta_idx: usize) -> Option<f64> {
        self.votes.get(r_idx, theta_idx)
    }

    /// Maps a point in accumulator cell units to `(r, theta)`.
    ///
    /// The r value is the lower edge of the point's r bin.
    pub fn line_params(&self, point: Point) -> HoughResult<(f64, f64)> {
        let (r_idx, theta_idx) = self.votes.view().cell_of(point)?;
        let out_of_bounds = HoughError::OutOfBoundsIndex {
            x: point.x,
            y: point.y,
            width: self.r_edges.len(),
            height: self.thetas.len(),
        };
        let r = *self.r_edges.get(r_idx).ok_or(out_of_bounds.clone())?;
        let theta = self.thetas.get(theta_idx).ok_or(out_of_bounds)?;
        Ok((r, theta))
    }
}
