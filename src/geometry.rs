//! Coordinate transforms between Cartesian points and `(r, theta)` lines.
//!
//! All three functions follow `r = x cos(theta) + y sin(theta)`. The forward
//! transform [`r_of`] is defined everywhere; the inverses divide by `cos` or
//! `sin` and are rejected at their singular angle instead of returning
//! infinities.

use crate::util::{HoughError, HoughResult};

/// Trigonometric magnitude below which an inverse transform is singular.
pub const SINGULAR_EPS: f64 = 1e-9;

/// Signed distance of the line through `(x, y)` with normal angle `theta`.
#[inline]
pub fn r_of(theta: f64, x: f64, y: f64) -> f64 {
    let (sin, cos) = theta.sin_cos();
    x * cos + y * sin
}

/// Solves the line equation for `x` given `y`.
///
/// Fails with [`HoughError::DegenerateGeometry`] when the line is horizontal
/// (`theta` near `pi / 2`).
pub fn x_on_line(y: f64, r: f64, theta: f64) -> HoughResult<f64> {
    let (sin, cos) = theta.sin_cos();
    if cos.abs() < SINGULAR_EPS {
        return Err(HoughError::DegenerateGeometry {
            theta,
            reason: "x is undefined for a horizontal line",
        });
    }
    Ok((r - y * sin) / cos)
}

/// Solves the line equation for `y` given `x`.
///
/// Fails with [`HoughError::DegenerateGeometry`] when the line is vertical
/// (`theta` near `0`).
pub fn y_on_line(x: f64, r: f64, theta: f64) -> HoughResult<f64> {
    let (sin, cos) = theta.sin_cos();
    if sin.abs() < SINGULAR_EPS {
        return Err(HoughError::DegenerateGeometry {
            theta,
            reason: "y is undefined for a vertical line",
        });
    }
    Ok((r - x * cos) / sin)
}

/// Element-wise [`r_of`] over equal-length slices.
pub fn r_of_each(thetas: &[f64], xs: &[f64], ys: &[f64]) -> HoughResult<Vec<f64>> {
    check_lengths(thetas.len(), xs.len(), ys.len())?;
    Ok(thetas
        .iter()
        .zip(xs.iter().zip(ys))
        .map(|(&theta, (&x, &y))| r_of(theta, x, y))
        .collect())
}

/// Element-wise [`x_on_line`]; fails on the first singular angle.
pub fn x_on_line_each(ys: &[f64], rs: &[f64], thetas: &[f64]) -> HoughResult<Vec<f64>> {
    check_lengths(ys.len(), rs.len(), thetas.len())?;
    ys.iter()
        .zip(rs.iter().zip(thetas))
        .map(|(&y, (&r, &theta))| x_on_line(y, r, theta))
        .collect()
}

/// Element-wise [`y_on_line`]; fails on the first singular angle.
pub fn y_on_line_each(xs: &[f64], rs: &[f64], thetas: &[f64]) -> HoughResult<Vec<f64>> {
    check_lengths(xs.len(), rs.len(), thetas.len())?;
    xs.iter()
        .zip(rs.iter().zip(thetas))
        .map(|(&x, (&r, &theta))| y_on_line(x, r, theta))
        .collect()
}

fn check_lengths(a: usize, b: usize, c: usize) -> HoughResult<()> {
    if a != b || b != c {
        return Err(HoughError::InvalidInput(
            "element-wise geometry needs equal-length inputs",
        ));
    }
    Ok(())
}
