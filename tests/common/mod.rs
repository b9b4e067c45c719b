//! Synthetic grids for integration tests.
#![allow(dead_code)]

use houghlines::ScalarGrid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Zero grid with `value` written at each `(x, y)` cell.
pub fn grid_with_spikes(width: usize, height: usize, spikes: &[(usize, usize)], value: f64) -> ScalarGrid {
    let mut grid = ScalarGrid::zeros(width, height).unwrap();
    for &(x, y) in spikes {
        *grid.get_mut(x, y).unwrap() = value;
    }
    grid
}

/// Adds uniform noise in `[0, amplitude)` to every cell.
pub fn add_background(grid: &mut ScalarGrid, amplitude: f64, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            *grid.get_mut(x, y).unwrap() += rng.random_range(0.0..amplitude);
        }
    }
}

/// Cells `(x, row)` for `x = start, start + step, ...` below `end`.
pub fn horizontal_cells(row: usize, start: usize, end: usize, step: usize) -> Vec<(usize, usize)> {
    (start..end).step_by(step).map(|x| (x, row)).collect()
}

/// Cells `(k, k + offset)` for `k = start, start + step, ...` below `end`.
pub fn diagonal_cells(offset: usize, start: usize, end: usize, step: usize) -> Vec<(usize, usize)> {
    (start..end).step_by(step).map(|k| (k, k + offset)).collect()
}
