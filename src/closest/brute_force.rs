use super::point::{Closest, Point};

/// Finds the closest pair by checking every pair of points
///
/// Pairs `(i, j)` with `i < j` are examined in index order and a pair only
/// replaces the current best when it is strictly closer, so on ties the
/// earliest pair in input order wins.
///
/// # Returns
///
/// A tuple `(pair, distance)` where:
/// - `pair` is the two closest points, in input order, or `None` for fewer than two points
/// - `distance` is their distance, or `f64::INFINITY` when `pair` is `None`
pub fn closest_pair_brute_force(points: &[Point]) -> Closest {
    let mut best = None;
    let mut min_dist = f64::INFINITY;

    for (i, p1) in points.iter().enumerate() {
        for p2 in &points[i + 1..] {
            let d = p1.dist(p2);
            if d < min_dist {
                min_dist = d;
                best = Some((*p1, *p2));
            }
        }
    }

    (best, min_dist)
}
