//! Convenience helpers for loading grids via the `image` crate.
//!
//! Available when the `image-io` feature is enabled. Pixel intensities are
//! copied verbatim into `f64` samples (0..=255).

use crate::grid::ScalarGrid;
use crate::util::{HoughError, HoughResult};
use std::path::Path;

/// Creates a grid from a grayscale image buffer.
pub fn grid_from_gray_image(img: &image::GrayImage) -> HoughResult<ScalarGrid> {
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data = img.as_raw().iter().map(|&v| f64::from(v)).collect();
    ScalarGrid::new(data, width, height)
}

/// Creates a grid from a dynamic image, converting to grayscale first.
pub fn grid_from_dynamic_image(img: &image::DynamicImage) -> HoughResult<ScalarGrid> {
    grid_from_gray_image(&img.to_luma8())
}

/// Loads an image from disk as a grayscale grid.
pub fn load_gray_grid<P: AsRef<Path>>(path: P) -> HoughResult<ScalarGrid> {
    let img = image::open(path).map_err(|err| HoughError::ImageIo {
        reason: err.to_string(),
    })?;
    grid_from_dynamic_image(&img)
}
