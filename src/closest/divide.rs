use super::brute_force::closest_pair_brute_force;
use super::point::{Closest, Point};
use super::sorted::{View, pre_sort};

// Divide and conquer closest pair (Shamos & Hoey):
//
// closest(Px, Py)
//    if |Px| <= 3
//       return bruteForce(Px)
//    split Px at its midpoint into Lx, Rx; split Py into Ly, Ry alike
//    d = min(closest(Lx, Ly), closest(Rx, Ry))
//    S = points of Py with |x - midX| <= d, in y order
//    for each p in S, compare p with the next 6 points of S
//    return the closest pair seen
//
// Two points of the same half are at least d apart, so a d x d square on
// either side of the split line holds at most 3 points whose y lies in
// [p.y, p.y + d). Any partner of p closer than d is therefore within the
// next 5 strip points, inside a window of 6.

/// Subsets up to this size are solved by brute force
pub const BRUTE_FORCE_CUTOFF: usize = 3;

/// Number of following strip points (in y order) each strip point is compared with
pub const STRIP_WINDOW: usize = 6;

/// Finds the closest pair using divide and conquer in O(n log n)
///
/// Reports the same distance as [`closest_pair_brute_force`]. When several
/// pairs tie at the minimum the reported pair may differ, but it is fixed
/// for a given multiset of points.
///
/// # Returns
///
/// A tuple `(pair, distance)` where:
/// - `pair` is the two closest points, or `None` for fewer than two points
/// - `distance` is their distance, or `f64::INFINITY` when `pair` is `None`
pub fn closest_pair(points: &[Point]) -> Closest {
    let sorted = pre_sort(points);
    closest_pair_rec(&sorted.view())
}

/// Recursive step over one sub-range of the sorted views
fn closest_pair_rec(view: &View) -> Closest {
    if view.len() <= BRUTE_FORCE_CUTOFF {
        return closest_pair_brute_force(view.by_x());
    }

    let (left, right) = view.split_mid();
    let (left_pair, left_dist) = closest_pair_rec(&left);
    let (right_pair, right_dist) = closest_pair_rec(&right);

    let (pair, dist) = if left_dist <= right_dist {
        (left_pair, left_dist)
    } else {
        (right_pair, right_dist)
    };

    let (strip_pair, strip_dist) = strip_merge(view.by_x(), view.by_y(), dist);
    if dist <= strip_dist {
        (pair, dist)
    } else {
        (strip_pair, strip_dist)
    }
}

/// Looks for a pair closer than `d` straddling the split line
///
/// The split line is the x of `by_x[by_x.len() / 2]`. Only points of `by_y`
/// within `d` of it take part, and each is compared with the next
/// [`STRIP_WINDOW`] of them in y order. `by_y` must be the points of `by_x`
/// ordered by y.
///
/// # Returns
///
/// The closest pair found and its distance, or `(None, d)` if no pair is
/// strictly closer than `d`.
pub fn strip_merge<I>(by_x: &[Point], by_y: I, d: f64) -> Closest
where
    I: IntoIterator<Item = Point>,
{
    if by_x.is_empty() {
        return (None, d);
    }
    let mid_x = by_x[by_x.len() / 2].x();

    let strip: Vec<Point> = by_y
        .into_iter()
        .filter(|p| mid_x - d <= p.x() && p.x() <= mid_x + d)
        .collect();

    let mut best = None;
    let mut min_dist = d;

    for (i, p1) in strip.iter().enumerate() {
        let end = (i + 1 + STRIP_WINDOW).min(strip.len());
        for p2 in &strip[i + 1..end] {
            let dist = p1.dist(p2);
            if dist < min_dist {
                min_dist = dist;
                best = Some((*p1, *p2));
            }
        }
    }

    (best, min_dist)
}
