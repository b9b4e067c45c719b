//! Houghlines finds straight lines hidden in noisy 2D scalar grids.
//!
//! The pipeline detects local peaks in the input grid, votes every peak into
//! an `(r, theta)` accumulator, detects peaks in the accumulator and finally
//! collects the input peaks lying within a band around each candidate line.
//! Filtering and voting can run row-parallel via the `rayon` feature;
//! `tracing` instruments the pipeline stages and `image-io` loads grids from
//! grayscale images.

pub mod accumulator;
pub mod filter;
pub mod geometry;
pub mod grid;
pub mod lines;
pub mod lowlevel;
pub mod peaks;
mod trace;
pub mod util;

#[cfg(feature = "image-io")]
pub use grid::io;

pub use accumulator::{Accumulator, AccumulatorBuilder, ThetaGrid};
pub use grid::{GridView, ScalarGrid};
pub use lines::{Detection, ExtractConfig, Line, LineExtractor, MemberPoint};
pub use peaks::{distances, PeakDetector, Point};
pub use util::{HoughError, HoughResult};
