//! Closest pair of points on the plane
//!
//! Two strategies are provided: an O(n^2) scan over every pair
//! ([`closest_pair_brute_force`]) and an O(n log n) divide and conquer
//! ([`closest_pair`]). Both return `(pair, distance)`; fewer than two points
//! give `(None, f64::INFINITY)`.

pub mod closest;
pub mod input;

#[cfg(test)]
mod input_test;

pub use closest::{Closest, Point, PointList, closest_pair, closest_pair_brute_force};
