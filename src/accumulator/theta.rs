//! Discrete normal-angle samples over `[0, pi)`.

use crate::util::{HoughError, HoughResult};
use std::f64::consts::PI;

/// Evenly spaced angles `k * pi / len` for `k` in `0..len`.
#[derive(Clone, Debug, PartialEq)]
pub struct ThetaGrid {
    len: usize,
    step: f64,
}

impl ThetaGrid {
    /// Creates a grid with `len` samples; `len` must be positive.
    pub fn new(len: usize) -> HoughResult<Self> {
        if len == 0 {
            return Err(HoughError::InvalidInput("theta_bins must be > 0"));
        }
        Ok(Self {
            len,
            step: PI / len as f64,
        })
    }

    /// Returns the number of angle samples.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; a grid holds at least one angle.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the spacing between consecutive angles in radians.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Returns the angle for `idx`, or `None` past the end.
    pub fn get(&self, idx: usize) -> Option<f64> {
        (idx < self.len).then(|| self.angle_at(idx))
    }

    /// Returns the angle for `idx` in radians.
    pub fn angle_at(&self, idx: usize) -> f64 {
        debug_assert!(idx < self.len);
        idx as f64 * PI / self.len as f64
    }

    /// Iterates over all angles.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|idx| self.angle_at(idx))
    }

    /// Returns the index nearest to `theta`, treating the axis as circular
    /// with period `pi`.
    pub fn nearest_index(&self, theta: f64) -> usize {
        let wrapped = theta.rem_euclid(PI);
        let idx = (wrapped / self.step).round() as usize;
        if idx >= self.len {
            0
        } else {
            idx
        }
    }
}
