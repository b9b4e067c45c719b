//! Sub-cell point coordinates.

/// A point in grid-cell units.
///
/// Detected peaks sit at cell centers, i.e. integer index plus `0.5`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    /// Column coordinate.
    pub x: f64,
    /// Row coordinate.
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the center of cell `(x, y)`.
    pub fn cell_center(x: usize, y: usize) -> Self {
        Self::new(x as f64 + 0.5, y as f64 + 0.5)
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Euclidean distance from `reference` to each point, in input order.
pub fn distances(reference: Point, points: &[Point]) -> Vec<f64> {
    points.iter().map(|&p| reference.distance(p)).collect()
}
