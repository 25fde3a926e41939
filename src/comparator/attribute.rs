//! Ranking by the crowding-distance attribute.

use super::Comparator;
use crate::solution::Solution;
use std::cmp::Ordering;

/// Orders solutions by their stored crowding distance.
///
/// With `lowest_is_best = false` (the archive default) a larger distance is
/// better, so the most crowded solution ranks worst. Solutions without a
/// distance compare `Equal` to everything.
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use u_archive::comparator::{Comparator, CrowdingDistanceComparator};
/// use u_archive::solution::{BasicSolution, Solution};
///
/// let mut sparse = BasicSolution::<f64>::from_objectives(vec![0.0, 1.0]);
/// let mut dense = BasicSolution::<f64>::from_objectives(vec![0.5, 0.5]);
/// sparse.set_crowding_distance(f64::INFINITY);
/// dense.set_crowding_distance(0.4);
///
/// let cmp = CrowdingDistanceComparator::default();
/// assert_eq!(cmp.compare(&sparse, &dense), Ordering::Less);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrowdingDistanceComparator {
    /// When true, a smaller distance is better.
    pub lowest_is_best: bool,
}

impl CrowdingDistanceComparator {
    pub fn new(lowest_is_best: bool) -> Self {
        Self { lowest_is_best }
    }
}

impl Default for CrowdingDistanceComparator {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<S: Solution> Comparator<S> for CrowdingDistanceComparator {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        let (Some(da), Some(db)) = (a.crowding_distance(), b.crowding_distance()) else {
            return Ordering::Equal;
        };

        let ord = da.partial_cmp(&db).unwrap_or(Ordering::Equal);
        if self.lowest_is_best {
            ord
        } else {
            ord.reverse()
        }
    }
}
