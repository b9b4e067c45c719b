//! Local-maximum detection on scalar grids.
//!
//! The same detector runs on the input signal and on the Hough accumulator.
//! A cell is reported when its sharpened response equals the maximum
//! sharpened response within `spread` cells and its raw value exceeds the
//! threshold. Broad plateaus are not deduplicated.

mod point;

pub use point::{distances, Point};

use crate::filter::{LocalMax, NeighborhoodFilter, Sharpen};
use crate::grid::{GridView, ScalarGrid};
use crate::trace::{trace_event, trace_span};
use crate::util::{HoughError, HoughResult};

/// Threshold-and-spread peak finder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PeakDetector {
    /// Raw value a peak must strictly exceed.
    pub threshold: f64,
    /// Radius of both the sharpening kernel and the maximum window.
    pub spread: usize,
    /// Run the filters row-parallel (requires the `rayon` feature).
    pub parallel: bool,
}

impl PeakDetector {
    /// Creates a sequential detector.
    pub fn new(threshold: f64, spread: usize) -> Self {
        Self {
            threshold,
            spread,
            parallel: false,
        }
    }

    /// Enables or disables row-parallel filtering.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the detector parameters.
    pub fn validate(&self) -> HoughResult<()> {
        if self.threshold.is_nan() {
            return Err(HoughError::InvalidInput("peak threshold must not be NaN"));
        }
        Ok(())
    }

    /// Returns the cell-centered locations of detected peaks in scan order.
    pub fn find(&self, grid: GridView<'_>) -> HoughResult<Vec<Point>> {
        self.validate()?;
        let _span = trace_span!(
            "find_peaks",
            width = grid.width(),
            height = grid.height(),
            spread = self.spread
        )
        .entered();

        let sharpened = self.filtered::<Sharpen>(grid)?;
        let window_max = self.filtered::<LocalMax>(sharpened.view())?;

        let mut peaks = Vec::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                let (Some(raw), Some(value), Some(max)) =
                    (grid.get(x, y), sharpened.get(x, y), window_max.get(x, y))
                else {
                    continue;
                };
                if value == max && raw > self.threshold {
                    peaks.push(Point::cell_center(x, y));
                }
            }
        }

        trace_event!("peaks_found", count = peaks.len());
        Ok(peaks)
    }

    #[cfg(feature = "rayon")]
    fn filtered<F: NeighborhoodFilter>(&self, grid: GridView<'_>) -> HoughResult<ScalarGrid> {
        if self.parallel {
            F::apply_par(grid, self.spread)
        } else {
            F::apply(grid, self.spread)
        }
    }

    #[cfg(not(feature = "rayon"))]
    fn filtered<F: NeighborhoodFilter>(&self, grid: GridView<'_>) -> HoughResult<ScalarGrid> {
        F::apply(grid, self.spread)
    }
}
