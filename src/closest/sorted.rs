//! Coordinate-sorted views of a point set
//!
//! The x-view is a copy of the points ordered by x. The y-view holds
//! positions into the x-view, ordered by y, so a sub-range of the x-view and
//! its y-view always describe the same points.

use std::cmp::Ordering;

use super::point::{Point, PointList};

/// Compares two points on dimension `dim`, breaking ties on the other one
fn cmp_on(dim: usize, a: &Point, b: &Point) -> Ordering {
    a.0[dim]
        .total_cmp(&b.0[dim])
        .then_with(|| a.0[1 - dim].total_cmp(&b.0[1 - dim]))
}

/// Holds points pre-sorted on each dimension
pub struct PreSorted {
    /// Points ordered by x, then y
    by_x: PointList,
    /// Positions in `by_x` ordered by y, then x
    by_y: Vec<usize>,
}

/// Pre-sorts points on each dimension
///
/// Both sorts are stable, and since ties fall back to the other coordinate
/// the resulting order depends only on coordinate values.
pub fn pre_sort(points: &[Point]) -> PreSorted {
    let mut by_x = points.to_vec();
    by_x.sort_by(|a, b| cmp_on(0, a, b));

    let mut by_y: Vec<usize> = (0..by_x.len()).collect();
    by_y.sort_by(|&a, &b| cmp_on(1, &by_x[a], &by_x[b]));

    PreSorted { by_x, by_y }
}

impl PreSorted {
    /// Points ordered by x
    pub fn by_x(&self) -> &[Point] {
        &self.by_x
    }

    /// Points ordered by y
    pub fn by_y(&self) -> impl Iterator<Item = Point> + '_ {
        self.by_y.iter().map(|&i| self.by_x[i])
    }

    /// Returns a view over the whole point set
    pub fn view(&self) -> View<'_> {
        View {
            all: &self.by_x,
            lo: 0,
            hi: self.by_x.len(),
            by_y: self.by_y.clone(),
        }
    }
}

/// Read-only window `[lo, hi)` of the x-view together with the y-ordering
/// of exactly the same points
pub struct View<'a> {
    all: &'a [Point],
    lo: usize,
    hi: usize,
    by_y: Vec<usize>,
}

impl<'a> View<'a> {
    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    pub fn is_empty(&self) -> bool {
        self.lo == self.hi
    }

    /// Points of this view ordered by x
    pub fn by_x(&self) -> &'a [Point] {
        &self.all[self.lo..self.hi]
    }

    /// Points of this view ordered by y
    pub fn by_y(&self) -> impl Iterator<Item = Point> + '_ {
        self.by_y.iter().map(|&i| self.all[i])
    }

    /// Splits the view at the x-view midpoint (`len / 2`)
    ///
    /// The left part gets `by_x[..len / 2]`. The y-view is partitioned on
    /// x-view position rather than on coordinate value, so points sharing the
    /// midpoint x land on the same side in both views. Relative y-order is
    /// kept on each side.
    pub fn split_mid(&self) -> (View<'a>, View<'a>) {
        let mid = self.lo + self.len() / 2;

        let mut left_y = Vec::with_capacity(mid - self.lo);
        let mut right_y = Vec::with_capacity(self.hi - mid);
        for &i in &self.by_y {
            if i < mid {
                left_y.push(i);
            } else {
                right_y.push(i);
            }
        }

        let left = View {
            all: self.all,
            lo: self.lo,
            hi: mid,
            by_y: left_y,
        };
        let right = View {
            all: self.all,
            lo: mid,
            hi: self.hi,
            by_y: right_y,
        };

        (left, right)
    }
}
