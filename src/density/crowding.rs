//! NSGA-II crowding distance.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - IEEE Transactions on Evolutionary Computation, 6(2), 182-197

use super::DensityEstimator;
use crate::solution::Solution;

/// Crowding distance assignment for diversity preservation.
///
/// Computes the crowding distance for each objective vector, measuring how
/// spread out the points are in objective space. Higher distance means the
/// point is more isolated (more diverse).
///
/// Boundary points (min/max for any objective) receive `f64::INFINITY`.
/// Sets of two or fewer points are all boundary.
///
/// # Algorithm (Deb et al., 2002)
///
/// For each objective:
/// 1. Stable-sort points by objective value (ties keep input order)
/// 2. Assign infinity to the first and last point
/// 3. For interior points, add the neighbor gap normalized by the range
///
/// An objective with zero range contributes nothing.
///
/// # Complexity
///
/// O(m * n * log n) where m = number of objectives, n = number of points
///
/// # Example
///
/// ```
/// use u_archive::density::crowding_distance;
///
/// let objectives = vec![
///     vec![1.0, 5.0],
///     vec![3.0, 3.0],
///     vec![5.0, 1.0],
/// ];
///
/// let distances = crowding_distance(&objectives);
///
/// assert!(distances[0].is_infinite());
/// assert!(distances[2].is_infinite());
/// assert!((distances[1] - 2.0).abs() < 1e-10);
/// ```
pub fn crowding_distance<T: AsRef<[f64]>>(objectives: &[T]) -> Vec<f64> {
    let n = objectives.len();
    if n <= 2 {
        return vec![f64::INFINITY; n];
    }

    let m = objectives[0].as_ref().len();
    let value = |i: usize, obj_idx: usize| objectives[i].as_ref()[obj_idx];
    let mut distances = vec![0.0f64; n];

    for obj_idx in 0..m {
        let mut indices: Vec<usize> = (0..n).collect();
        indices.sort_by(|&a, &b| {
            value(a, obj_idx)
                .partial_cmp(&value(b, obj_idx))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        distances[indices[0]] = f64::INFINITY;
        distances[indices[n - 1]] = f64::INFINITY;

        let min_val = value(indices[0], obj_idx);
        let max_val = value(indices[n - 1], obj_idx);
        let range = max_val - min_val;

        if range > 0.0 {
            for i in 1..(n - 1) {
                let prev = value(indices[i - 1], obj_idx);
                let next = value(indices[i + 1], obj_idx);
                distances[indices[i]] += (next - prev) / range;
            }
        }
    }

    distances
}

/// Crowding distance as a [`DensityEstimator`].
///
/// Writes the distance into each solution's crowding-distance slot.
/// The slice order is left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrowdingDistance;

impl<S: Solution> DensityEstimator<S> for CrowdingDistance {
    fn compute_density_estimator(&self, solutions: &mut [S]) {
        if solutions.is_empty() {
            return;
        }

        let distances = {
            let objectives: Vec<&[f64]> = solutions.iter().map(|s| s.objectives()).collect();
            crowding_distance(&objectives)
        };

        for (solution, distance) in solutions.iter_mut().zip(distances) {
            solution.set_crowding_distance(distance);
        }
    }
}
