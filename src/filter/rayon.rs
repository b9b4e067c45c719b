//! Rayon-parallel filters (feature-gated).
//!
//! Rows are independent once the summed-area table or the horizontal max pass
//! exists, so each output row is computed on its own task. Results match the
//! scalar filters bit for bit.

use crate::filter::scalar::{grid_row, max_column_window, max_row, sharpen_row, SummedArea};
use crate::filter::SharpenKernel;
use crate::grid::{GridView, ScalarGrid};
use crate::util::{HoughError, HoughResult};
use rayon::prelude::*;

/// Row-parallel sharpening.
pub fn sharpen_par(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid> {
    let table = SummedArea::build(grid)?;
    let center = SharpenKernel::center_weight_for(spread);
    let width = grid.width();
    let mut out = vec![0.0; width * grid.height()];
    out.par_chunks_exact_mut(width)
        .enumerate()
        .try_for_each(|(y, out_row)| sharpen_row(grid, &table, center, spread, y, out_row))?;
    ScalarGrid::new(out, width, grid.height())
}

/// Row-parallel maximum filter.
pub fn local_max_par(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid> {
    let width = grid.width();
    let height = grid.height();
    let mut horizontal = vec![0.0; width * height];
    horizontal
        .par_chunks_exact_mut(width)
        .enumerate()
        .try_for_each(|(y, out_row)| {
            max_row(grid_row(grid, y)?, spread, out_row);
            Ok::<(), HoughError>(())
        })?;
    let mut out = vec![0.0; width * height];
    out.par_chunks_exact_mut(width)
        .enumerate()
        .for_each(|(y, out_row)| {
            max_column_window(&horizontal, width, height, spread, y, out_row)
        });
    ScalarGrid::new(out, width, height)
}
