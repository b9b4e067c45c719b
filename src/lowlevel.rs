//! Low-level building blocks for custom pipelines.
//!
//! These expose the filters and binning helpers behind the high-level
//! `LineExtractor`. Most users should prefer `LineExtractor`, `PeakDetector`
//! and `AccumulatorBuilder`.

pub use crate::filter::{
    convolve_zero_padded, local_max, sharpen, LocalMax, NeighborhoodFilter, Sharpen, SharpenKernel,
};
#[cfg(feature = "rayon")]
pub use crate::filter::rayon::{local_max_par, sharpen_par};
pub use crate::geometry::{
    r_of, r_of_each, x_on_line, x_on_line_each, y_on_line, y_on_line_each, SINGULAR_EPS,
};
pub use crate::util::math::{digitize, linspace};
