use std::fmt;

/// Point represents a position on the plane
///
/// The point is stored as [x, y] where:
/// - `[0]` is the x coordinate
/// - `[1]` is the y coordinate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point(pub [f64; 2]);

/// PointList is a collection of Points
pub type PointList = Vec<Point>;

/// Result of a closest pair search: the pair (if any) and its distance
///
/// An absent pair comes with `f64::INFINITY`, which means no closest pair is
/// defined for the input (fewer than two points).
pub type Closest = (Option<(Point, Point)>, f64);

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point([x, y])
    }

    pub fn x(&self) -> f64 {
        self.0[0]
    }

    pub fn y(&self) -> f64 {
        self.0[1]
    }

    /// Returns Euclidean distance between two points
    pub fn dist(&self, b: &Point) -> f64 {
        use super::distance::euclidean;
        euclidean(self, b)
    }

    /// Checks that both coordinates are neither NaN nor infinite
    pub fn is_finite(&self) -> bool {
        self.0[0].is_finite() && self.0[1].is_finite()
    }

    /// Returns the point moved by (dx, dy)
    pub fn translate(&self, dx: f64, dy: f64) -> Point {
        Point([self.0[0] + dx, self.0[1] + dy])
    }

    /// Returns the point with both coordinates multiplied by `k`
    pub fn scale(&self, k: f64) -> Point {
        Point([self.0[0] * k, self.0[1] * k])
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point([x, y])
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Point([f64::from(x), f64::from(y)])
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0[0], self.0[1])
    }
}
