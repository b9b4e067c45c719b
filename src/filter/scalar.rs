//! Scalar reference implementations of the neighborhood filters.
//!
//! `sharpen` evaluates the kernel through a summed-area table: with every
//! off-center weight equal to `-1`, the response is
//! `(center + 1) * v - box_sum`, where the box sum covers only in-bounds
//! cells (zero padding). Windows larger than the grid are clipped to it.
//!
//! A prefix sum carries every sample into all windows below and to the right
//! of it, so the table refuses non-finite samples.

use crate::filter::SharpenKernel;
use crate::grid::{GridView, ScalarGrid};
use crate::util::{HoughError, HoughResult};

/// Sharpens a grid with the kernel for `spread`.
pub fn sharpen(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid> {
    let table = SummedArea::build(grid)?;
    let center = SharpenKernel::center_weight_for(spread);
    let width = grid.width();
    let mut out = vec![0.0; width * grid.height()];
    for (y, out_row) in out.chunks_exact_mut(width).enumerate() {
        sharpen_row(grid, &table, center, spread, y, out_row)?;
    }
    ScalarGrid::new(out, width, grid.height())
}

/// Maximum over the in-bounds `(2 * spread + 1)` square window of each cell.
pub fn local_max(grid: GridView<'_>, spread: usize) -> HoughResult<ScalarGrid> {
    let width = grid.width();
    let height = grid.height();
    let mut horizontal = vec![0.0; width * height];
    for (y, out_row) in horizontal.chunks_exact_mut(width).enumerate() {
        max_row(grid_row(grid, y)?, spread, out_row);
    }
    let mut out = vec![0.0; width * height];
    for (y, out_row) in out.chunks_exact_mut(width).enumerate() {
        max_column_window(&horizontal, width, height, spread, y, out_row);
    }
    ScalarGrid::new(out, width, height)
}

/// Direct zero-padded convolution with an explicit kernel.
///
/// Quadratic in the kernel size; kept as the reference form of [`sharpen`].
pub fn convolve_zero_padded(grid: GridView<'_>, kernel: &SharpenKernel) -> HoughResult<ScalarGrid> {
    let width = grid.width();
    let height = grid.height();
    let spread = kernel.spread() as isize;
    let side = kernel.size();
    let weights = kernel.weights();
    let mut out = vec![0.0; width * height];
    for y in 0..height {
        for x in 0..width {
            let mut acc = 0.0;
            for ky in -spread..=spread {
                for kx in -spread..=spread {
                    let sx = x as isize + kx;
                    let sy = y as isize + ky;
                    if sx < 0 || sy < 0 {
                        continue;
                    }
                    if let Some(value) = grid.get(sx as usize, sy as usize) {
                        let w = weights[(ky + spread) as usize * side + (kx + spread) as usize];
                        acc += w * value;
                    }
                }
            }
            out[y * width + x] = acc;
        }
    }
    ScalarGrid::new(out, width, height)
}

/// Inclusive prefix sums with a zero border row and column.
pub(crate) struct SummedArea {
    table: Vec<f64>,
    width: usize,
    height: usize,
}

impl SummedArea {
    pub(crate) fn build(grid: GridView<'_>) -> HoughResult<Self> {
        let width = grid.width();
        let height = grid.height();
        let w1 = width + 1;
        let mut table = vec![0.0; w1 * (height + 1)];
        for y in 0..height {
            let row = grid_row(grid, y)?;
            let mut run = 0.0;
            for (x, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(HoughError::InvalidInput("grid samples must be finite"));
                }
                run += value;
                table[(y + 1) * w1 + x + 1] = table[y * w1 + x + 1] + run;
            }
        }
        Ok(Self {
            table,
            width,
            height,
        })
    }

    /// Sum over the clipped window of radius `spread` around `(x, y)`.
    fn window_sum(&self, x: usize, y: usize, spread: usize) -> f64 {
        let w1 = self.width + 1;
        let x0 = x.saturating_sub(spread);
        let y0 = y.saturating_sub(spread);
        let x1 = window_end(x, spread, self.width);
        let y1 = window_end(y, spread, self.height);
        self.table[y1 * w1 + x1] - self.table[y0 * w1 + x1] - self.table[y1 * w1 + x0]
            + self.table[y0 * w1 + x0]
    }
}

/// Exclusive end of the radius-`spread` window around `pos`, clipped to `len`.
fn window_end(pos: usize, spread: usize, len: usize) -> usize {
    pos.saturating_add(spread).saturating_add(1).min(len)
}

pub(crate) fn grid_row<'a>(grid: GridView<'a>, y: usize) -> HoughResult<&'a [f64]> {
    grid.row(y).ok_or(HoughError::BufferTooSmall {
        needed: (y + 1) * grid.stride(),
        got: grid.as_slice().len(),
    })
}

pub(crate) fn sharpen_row(
    grid: GridView<'_>,
    table: &SummedArea,
    center: f64,
    spread: usize,
    y: usize,
    out_row: &mut [f64],
) -> HoughResult<()> {
    let row = grid_row(grid, y)?;
    for (x, (out, &value)) in out_row.iter_mut().zip(row).enumerate() {
        *out = (center + 1.0) * value - table.window_sum(x, y, spread);
    }
    Ok(())
}

pub(crate) fn max_row(row: &[f64], spread: usize, out_row: &mut [f64]) {
    let width = row.len();
    for (x, out) in out_row.iter_mut().enumerate() {
        let x0 = x.saturating_sub(spread);
        let x1 = window_end(x, spread, width);
        *out = row[x0..x1].iter().copied().fold(f64::NEG_INFINITY, f64::max);
    }
}

pub(crate) fn max_column_window(
    horizontal: &[f64],
    width: usize,
    height: usize,
    spread: usize,
    y: usize,
    out_row: &mut [f64],
) {
    let y0 = y.saturating_sub(spread);
    let y1 = window_end(y, spread, height);
    out_row.fill(f64::NEG_INFINITY);
    for src_y in y0..y1 {
        let src = &horizontal[src_y * width..(src_y + 1) * width];
        for (out, &value) in out_row.iter_mut().zip(src) {
            *out = out.max(value);
        }
    }
}
