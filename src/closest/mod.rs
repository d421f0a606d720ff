//! Package closest finds the closest pair of 2-D points, by brute force or
//! by divide and conquer
pub mod brute_force;
pub mod distance;
pub mod divide;
pub mod point;
pub mod sorted;

#[cfg(test)]
mod distance_test;

pub use brute_force::closest_pair_brute_force;
pub use distance::euclidean;
pub use divide::{BRUTE_FORCE_CUTOFF, STRIP_WINDOW, closest_pair, strip_merge};
pub use point::{Closest, Point, PointList};
pub use sorted::{PreSorted, View, pre_sort};
