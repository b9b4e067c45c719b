//! Neighborhood filters used by peak detection.
//!
//! Both filters work on a square window of radius `spread` around each cell.
//! [`Sharpen`] convolves with a zero-padded sharpening kernel; [`LocalMax`]
//! takes the maximum over the in-bounds part of the window.

use crate::grid::{GridView, ScalarGrid};
use crate::util::{HoughError, HoughResult};

/// Trait for window filters parameterized by a spread radius.
pub trait NeighborhoodFilter {
    /// Applies the filter to the full grid.
    fn apply(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid>;

    /// Row-parallel variant; output is bit-identical to [`Self::apply`].
    #[cfg(feature = "rayon")]
    fn apply_par(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid>;
}

/// Square sharpening kernel of side `2 * spread + 1`.
///
/// Every weight is `-1` except the center, which equals the number of cells
/// in the kernel. The weights therefore sum to one: the identity plus a
/// zero-sum Laplacian-like term.
#[derive(Clone, Debug, PartialEq)]
pub struct SharpenKernel {
    spread: usize,
    weights: Vec<f64>,
}

impl SharpenKernel {
    /// Builds the explicit kernel for a given spread radius.
    ///
    /// The weights are materialized, so spreads whose kernel does not fit in
    /// memory addressing are rejected. The filters themselves never build
    /// the kernel and accept any spread.
    pub fn new(spread: usize) -> HoughResult<Self> {
        let count = spread
            .checked_mul(2)
            .and_then(|v| v.checked_add(1))
            .and_then(|side| side.checked_mul(side))
            .ok_or(HoughError::InvalidInput("spread too large for an explicit kernel"))?;
        let side = 2 * spread + 1;
        let mut weights = vec![-1.0; count];
        weights[spread * side + spread] = count as f64;
        Ok(Self { spread, weights })
    }

    /// Center weight for `spread`, evaluated in floating point.
    pub fn center_weight_for(spread: usize) -> f64 {
        (2.0 * spread as f64 + 1.0).powi(2)
    }

    /// Returns the spread radius.
    pub fn spread(&self) -> usize {
        self.spread
    }

    /// Returns the side length of the kernel.
    pub fn size(&self) -> usize {
        2 * self.spread + 1
    }

    /// Returns the weight of the center cell.
    pub fn center_weight(&self) -> f64 {
        Self::center_weight_for(self.spread)
    }

    /// Returns the row-major kernel weights.
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

/// Zero-padded sharpening filter.
pub struct Sharpen;

/// In-bounds maximum filter.
pub struct LocalMax;

impl NeighborhoodFilter for Sharpen {
    fn apply(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid> {
        scalar::sharpen(grid, spread)
    }

    #[cfg(feature = "rayon")]
    fn apply_par(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid> {
        rayon::sharpen_par(grid, spread)
    }
}

impl NeighborhoodFilter for LocalMax {
    fn apply(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid> {
        scalar::local_max(grid, spread)
    }

    #[cfg(feature = "rayon")]
    fn apply_par(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid> {
        rayon::local_max_par(grid, spread)
    }
}

pub mod scalar;

#[cfg(feature = "rayon")]
pub mod rayon;

pub use scalar::{convolve_zero_padded, local_max, sharpen};
