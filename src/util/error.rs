//! Error types for houghlines.

use thiserror::Error;

/// Result alias for houghlines operations.
pub type HoughResult<T> = std::result::Result<T, HoughError>;

/// Errors that can occur while detecting lines.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum HoughError {
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Grid dimensions are zero or overflow.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Row stride is shorter than the row width.
    #[error("stride {stride} is smaller than width {width}")]
    InvalidStride { width: usize, stride: usize },
    /// Backing buffer does not hold the described grid.
    #[error("buffer too small: needed {needed}, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// Nested input rows do not form a rectangular 2D grid.
    #[error("input is not a 2D grid: row {row} has {got} samples, expected {expected}")]
    NotTwoDimensional {
        row: usize,
        expected: usize,
        got: usize,
    },
    /// A Cartesian inverse transform was requested at its singular angle.
    #[error("degenerate geometry at theta={theta}: {reason}")]
    DegenerateGeometry { theta: f64, reason: &'static str },
    /// A point maps to a cell outside the owning grid.
    #[error("point ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBoundsIndex {
        x: f64,
        y: f64,
        width: usize,
        height: usize,
    },
    /// Image decoding failed.
    #[cfg(feature = "image-io")]
    #[error("image io: {reason}")]
    ImageIo { reason: String },
}
