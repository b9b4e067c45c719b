//! Detected lines and point membership.
//!
//! Membership is a band test on the forward transform: a point belongs to a
//! line when `|r(theta, x, y) - r| < width / 2`. The test is exact for every
//! angle, unlike the Cartesian inverses in [`crate::geometry`].

mod extract;

pub use extract::{Detection, ExtractConfig, LineExtractor};

use crate::geometry::{r_of, x_on_line, y_on_line};
use crate::grid::GridView;
use crate::peaks::Point;
use crate::util::{HoughError, HoughResult};
use std::f64::consts::PI;

/// A point assigned to a line, with the source sample at its cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MemberPoint {
    pub point: Point,
    pub signal: f64,
}

/// Infinite line `x cos(theta) + y sin(theta) = r` with `theta` in `[0, pi)`.
///
/// Two lines are equal when their `(r, theta)` match; votes and members are
/// not compared.
#[derive(Clone, Debug)]
pub struct Line {
    /// Signed distance from the origin along the normal.
    pub r: f64,
    /// Normal angle in radians.
    pub theta: f64,
    /// Accumulator votes at the peak that produced this line.
    pub votes: f64,
    members: Vec<MemberPoint>,
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.r == other.r && self.theta == other.theta
    }
}

impl Line {
    /// Creates a line with no members.
    pub fn new(r: f64, theta: f64) -> HoughResult<Self> {
        if !r.is_finite() {
            return Err(HoughError::InvalidInput("line r must be finite"));
        }
        if !(0.0..PI).contains(&theta) {
            return Err(HoughError::InvalidInput("line theta must lie in [0, pi)"));
        }
        Ok(Self {
            r,
            theta,
            votes: 0.0,
            members: Vec::new(),
        })
    }

    /// Sets the vote count.
    pub fn with_votes(mut self, votes: f64) -> Self {
        self.votes = votes;
        self
    }

    /// Returns the member points assigned by [`Line::assign_members`].
    pub fn members(&self) -> &[MemberPoint] {
        &self.members
    }

    /// Perpendicular distance from `point` to the line.
    pub fn distance_to(&self, point: Point) -> f64 {
        (r_of(self.theta, point.x, point.y) - self.r).abs()
    }

    /// Replaces the members with every point inside the band of `width`.
    ///
    /// Each member's signal is read from `source`; a member outside the
    /// source grid is an error. Points are tested in input order, and a point
    /// may belong to several lines.
    pub fn assign_members(
        &mut self,
        points: &[Point],
        width: f64,
        source: GridView<'_>,
    ) -> HoughResult<()> {
        if !(width.is_finite() && width > 0.0) {
            return Err(HoughError::InvalidInput("line width must be finite and > 0"));
        }
        let half_width = width / 2.0;
        let mut members = Vec::new();
        for &point in points {
            if self.distance_to(point) < half_width {
                members.push(MemberPoint {
                    point,
                    signal: source.sample_at(point)?,
                });
            }
        }
        self.members = members;
        Ok(())
    }

    /// Clips the line to the `[0, width] x [0, height]` rectangle.
    ///
    /// Returns the two farthest-apart boundary crossings, or `None` when the
    /// line misses the rectangle or only touches a corner. Borders parallel
    /// to the line are skipped instead of solved through the singular
    /// inverse.
    pub fn segment_within(&self, width: usize, height: usize) -> Option<(Point, Point)> {
        const EDGE_EPS: f64 = 1e-9;
        let (w, h) = (width as f64, height as f64);
        let mut hits: Vec<Point> = Vec::with_capacity(4);
        let mut push = |p: Point| {
            if !hits.iter().any(|q| q.distance(p) < EDGE_EPS) {
                hits.push(p);
            }
        };

        for x in [0.0, w] {
            if let Ok(y) = y_on_line(x, self.r, self.theta) {
                if (-EDGE_EPS..=h + EDGE_EPS).contains(&y) {
                    push(Point::new(x, y.clamp(0.0, h)));
                }
            }
        }
        for y in [0.0, h] {
            if let Ok(x) = x_on_line(y, self.r, self.theta) {
                if (-EDGE_EPS..=w + EDGE_EPS).contains(&x) {
                    push(Point::new(x.clamp(0.0, w), y));
                }
            }
        }

        let mut best: Option<(Point, Point, f64)> = None;
        for (i, &a) in hits.iter().enumerate() {
            for &b in &hits[i + 1..] {
                let d = a.distance(b);
                if best.map_or(true, |(_, _, best_d)| d > best_d) {
                    best = Some((a, b, d));
                }
            }
        }
        best.map(|(a, b, _)| (a, b))
    }
}

#[cfg(test)]
mod tests {
    use super::Line;
    use crate::grid::ScalarGrid;
    use crate::peaks::Point;
    use crate::HoughError;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn new_rejects_theta_outside_half_turn() {
        assert!(Line::new(1.0, PI).is_err());
        assert!(Line::new(1.0, -0.1).is_err());
        assert!(Line::new(f64::NAN, 0.3).is_err());
        assert!(Line::new(-3.0, 0.0).is_ok());
    }

    #[test]
    fn membership_carries_source_signal() {
        let mut grid = ScalarGrid::zeros(10, 10).unwrap();
        *grid.get_mut(5, 2).unwrap() = 4.0;
        let mut line = Line::new(5.5, 0.0).unwrap();
        let points = [Point::new(5.5, 2.5), Point::new(8.5, 2.5)];
        line.assign_members(&points, 1.0, grid.view()).unwrap();
        assert_eq!(line.members().len(), 1);
        assert_eq!(line.members()[0].point, points[0]);
        assert_eq!(line.members()[0].signal, 4.0);
    }

    #[test]
    fn membership_rejects_member_outside_source() {
        let grid = ScalarGrid::zeros(4, 4).unwrap();
        let mut line = Line::new(2.0, 0.0).unwrap();
        let err = line
            .assign_members(&[Point::new(2.0, 7.0)], 1.0, grid.view())
            .unwrap_err();
        assert!(matches!(err, HoughError::OutOfBoundsIndex { .. }));
    }

    #[test]
    fn membership_rejects_bad_width() {
        let grid = ScalarGrid::zeros(4, 4).unwrap();
        let mut line = Line::new(2.0, 0.0).unwrap();
        for width in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(line.assign_members(&[], width, grid.view()).is_err());
        }
    }

    #[test]
    fn segment_of_vertical_and_horizontal_lines() {
        let vertical = Line::new(3.0, 0.0).unwrap();
        let (a, b) = vertical.segment_within(10, 8).unwrap();
        assert!((a.x - 3.0).abs() < 1e-9 && (b.x - 3.0).abs() < 1e-9);
        assert!(((a.y - b.y).abs() - 8.0).abs() < 1e-9);

        let horizontal = Line::new(4.0, FRAC_PI_2).unwrap();
        let (a, b) = horizontal.segment_within(10, 8).unwrap();
        assert!((a.y - 4.0).abs() < 1e-9 && (b.y - 4.0).abs() < 1e-9);
        assert!(((a.x - b.x).abs() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn segment_of_diagonal_spans_corners() {
        let diagonal = Line::new(0.0, 3.0 * FRAC_PI_4).unwrap();
        let (a, b) = diagonal.segment_within(10, 10).unwrap();
        assert!((a.distance(b) - 200f64.sqrt()).abs() < 1e-6);
    }

    #[test]
    fn segment_misses_rectangle() {
        let outside = Line::new(-5.0, 0.0).unwrap();
        assert!(outside.segment_within(10, 10).is_none());
    }

    #[test]
    fn equality_ignores_votes_and_members() {
        let grid = ScalarGrid::zeros(10, 10).unwrap();
        let bare = Line::new(2.5, 0.0).unwrap();
        let mut voted = Line::new(2.5, 0.0).unwrap().with_votes(7.0);
        voted
            .assign_members(&[Point::new(2.5, 4.5)], 1.0, grid.view())
            .unwrap();
        assert_eq!(voted.members().len(), 1);
        assert_eq!(bare, voted);
        assert_ne!(bare, Line::new(2.5, 0.1).unwrap());
    }
}
