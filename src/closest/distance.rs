use super::point::Point;

/// Calculates Euclidean distance between two points
///
/// `sqrt((x2 - x1)^2 + (y2 - y1)^2)`, never negative. Symmetric in its
/// arguments, and zero for points with equal coordinates.
pub fn euclidean(p1: &Point, p2: &Point) -> f64 {
    let dx = p2.0[0] - p1.0[0];
    let dy = p2.0[1] - p1.0[1];

    (dx * dx + dy * dy).sqrt()
}
