//! Density estimators.
//!
//! A density estimator annotates every member of a non-dominated set with a
//! diversity measure. Bounded archives use it to decide which member to
//! evict; it never affects dominance.

mod crowding;

pub use crowding::{crowding_distance, CrowdingDistance};

/// Assigns a density value to each solution of a set.
///
/// Implementations write into the solutions (see
/// [`Solution::set_crowding_distance`](crate::solution::Solution::set_crowding_distance))
/// and must not reorder the slice.
pub trait DensityEstimator<S> {
    fn compute_density_estimator(&self, solutions: &mut [S]);
}
