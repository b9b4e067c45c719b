//! Scalar grids and borrowed views.
//!
//! `GridView` is a borrowed 2D view into a 1D `f64` buffer with an explicit
//! stride. Storage is row-major: `x` indexes columns (the width axis) and `y`
//! indexes rows. ROI slices are zero-copy views into the same backing slice
//! and retain the original stride.

use crate::peaks::Point;
use crate::util::{HoughError, HoughResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Borrowed 2D grid view with an explicit stride.
#[derive(Copy, Clone, Debug)]
pub struct GridView<'a> {
    data: &'a [f64],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a> GridView<'a> {
    /// Creates a contiguous view with `stride == width`.
    pub fn from_slice(data: &'a [f64], width: usize, height: usize) -> HoughResult<Self> {
        Self::new(data, width, height, width)
    }

    /// Creates a view with an explicit stride.
    pub fn new(data: &'a [f64], width: usize, height: usize, stride: usize) -> HoughResult<Self> {
        let needed = required_len(width, height, stride)?;
        if data.len() < needed {
            return Err(HoughError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
        })
    }

    /// Returns the grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the stride in elements between row starts.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Returns the backing slice including any row padding.
    pub fn as_slice(&self) -> &'a [f64] {
        self.data
    }

    /// Returns the sample at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = y.checked_mul(self.stride)?.checked_add(x)?;
        self.data.get(idx).copied()
    }

    /// Returns a contiguous slice for row `y` with length `width`.
    pub fn row(&self, y: usize) -> Option<&'a [f64]> {
        if y >= self.height {
            return None;
        }
        let start = y.checked_mul(self.stride)?;
        let end = start.checked_add(self.width)?;
        self.data.get(start..end)
    }

    /// Returns the integer cell containing `point`.
    ///
    /// Coordinates are floored, so a cell-centered point `(x + 0.5, y + 0.5)`
    /// maps back to `(x, y)`. Points outside the grid are rejected rather
    /// than clamped.
    pub fn cell_of(&self, point: Point) -> HoughResult<(usize, usize)> {
        cell_index(point, self.width, self.height)
    }

    /// Returns the sample in the cell containing `point`.
    pub fn sample_at(&self, point: Point) -> HoughResult<f64> {
        let (x, y) = self.cell_of(point)?;
        self.get(x, y).ok_or(HoughError::OutOfBoundsIndex {
            x: point.x,
            y: point.y,
            width: self.width,
            height: self.height,
        })
    }

    /// Returns a zero-copy ROI view into the same backing buffer.
    pub fn roi(&self, x: usize, y: usize, width: usize, height: usize) -> HoughResult<GridView<'a>> {
        if width == 0 || height == 0 {
            return Err(HoughError::InvalidDimensions { width, height });
        }
        let fits = x
            .checked_add(width)
            .zip(y.checked_add(height))
            .is_some_and(|(end_x, end_y)| end_x <= self.width && end_y <= self.height);
        if !fits {
            return Err(HoughError::OutOfBoundsIndex {
                x: x as f64,
                y: y as f64,
                width: self.width,
                height: self.height,
            });
        }

        let start = y * self.stride + x;
        let data = self
            .data
            .get(start..)
            .ok_or(HoughError::BufferTooSmall {
                needed: start.saturating_add(1),
                got: self.data.len(),
            })?;
        GridView::new(data, width, height, self.stride)
    }

    /// Copies the view into an owned contiguous grid.
    pub fn to_owned_grid(&self) -> ScalarGrid {
        let mut data = Vec::with_capacity(self.width * self.height);
        for y in 0..self.height {
            let start = y * self.stride;
            data.extend_from_slice(&self.data[start..start + self.width]);
        }
        ScalarGrid {
            data,
            width: self.width,
            height: self.height,
        }
    }
}

/// Owned contiguous grid of `f64` samples.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarGrid {
    data: Vec<f64>,
    width: usize,
    height: usize,
}

impl ScalarGrid {
    /// Wraps a row-major buffer of exactly `width * height` samples.
    pub fn new(data: Vec<f64>, width: usize, height: usize) -> HoughResult<Self> {
        let needed = required_len(width, height, width)?;
        if data.len() < needed {
            return Err(HoughError::BufferTooSmall {
                needed,
                got: data.len(),
            });
        }
        if data.len() > needed {
            return Err(HoughError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a zero-filled grid.
    pub fn zeros(width: usize, height: usize) -> HoughResult<Self> {
        let len = required_len(width, height, width)?;
        Self::new(vec![0.0; len], width, height)
    }

    /// Builds a grid from nested rows, `rows[y][x]`.
    ///
    /// Ragged input is not a 2D grid and is rejected.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> HoughResult<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(HoughError::InvalidDimensions { width, height });
        }
        let mut data = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(HoughError::NotTwoDimensional {
                    row: row_idx,
                    expected: width,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Self::new(data, width, height)
    }

    /// Returns the grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the row-major sample buffer.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Returns a borrowed view of the grid.
    pub fn view(&self) -> GridView<'_> {
        GridView {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.width,
        }
    }

    /// Returns the sample at `(x, y)` if it is within bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get(y * self.width + x).copied()
    }

    /// Returns a mutable reference to the sample at `(x, y)`.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.data.get_mut(y * self.width + x)
    }

    /// Returns the cell holding the largest sample, first in scan order on ties.
    ///
    /// NaN samples are ignored; an all-NaN grid yields `None`.
    pub fn argmax(&self) -> Option<(usize, usize)> {
        let mut best: Option<(usize, f64)> = None;
        for (idx, &value) in self.data.iter().enumerate() {
            if value.is_nan() {
                continue;
            }
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((idx, value));
            }
        }
        best.map(|(idx, _)| (idx % self.width, idx / self.width))
    }
}

pub(crate) fn cell_index(point: Point, width: usize, height: usize) -> HoughResult<(usize, usize)> {
    let out_of_bounds = HoughError::OutOfBoundsIndex {
        x: point.x,
        y: point.y,
        width,
        height,
    };
    let (fx, fy) = (point.x.floor(), point.y.floor());
    if !(fx >= 0.0 && fy >= 0.0 && fx < width as f64 && fy < height as f64) {
        return Err(out_of_bounds);
    }
    Ok((fx as usize, fy as usize))
}

fn required_len(width: usize, height: usize, stride: usize) -> HoughResult<usize> {
    if width == 0 || height == 0 {
        return Err(HoughError::InvalidDimensions { width, height });
    }
    if stride < width {
        return Err(HoughError::InvalidStride { width, stride });
    }
    (height - 1)
        .checked_mul(stride)
        .and_then(|v| v.checked_add(width))
        .ok_or(HoughError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::{GridView, ScalarGrid};
    use crate::peaks::Point;
    use crate::HoughError;

    #[test]
    fn cell_of_floors_cell_centers() {
        let grid = ScalarGrid::zeros(4, 3).unwrap();
        let view = grid.view();
        assert_eq!(view.cell_of(Point::new(2.5, 1.5)).unwrap(), (2, 1));
        assert_eq!(view.cell_of(Point::new(0.0, 0.0)).unwrap(), (0, 0));
    }

    #[test]
    fn cell_of_rejects_points_outside() {
        let grid = ScalarGrid::zeros(4, 3).unwrap();
        let view = grid.view();
        for point in [
            Point::new(4.0, 1.0),
            Point::new(-0.1, 1.0),
            Point::new(1.0, 3.5),
            Point::new(f64::NAN, 1.0),
        ] {
            let err = view.cell_of(point).unwrap_err();
            assert!(matches!(err, HoughError::OutOfBoundsIndex { .. }));
        }
    }

    #[test]
    fn argmax_skips_nan() {
        let grid = ScalarGrid::new(vec![1.0, f64::NAN, 3.0, 3.0], 2, 2).unwrap();
        assert_eq!(grid.argmax(), Some((0, 1)));
    }

    #[test]
    fn to_owned_grid_drops_padding() {
        let data = [1.0, 2.0, -1.0, 3.0, 4.0, -1.0];
        let view = GridView::new(&data, 2, 2, 3).unwrap();
        let owned = view.to_owned_grid();
        assert_eq!(owned.data(), &[1.0, 2.0, 3.0, 4.0]);
    }
}
