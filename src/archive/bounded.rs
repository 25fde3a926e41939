//! Capacity-bounded archive with density-driven eviction.

use super::config::ArchiveConfig;
use super::non_dominated::NonDominatedArchive;
use super::Archive;
use crate::comparator::{Comparator, CrowdingDistanceComparator};
use crate::density::{CrowdingDistance, DensityEstimator};
use crate::solution::Solution;
use log::debug;
use std::cmp::Ordering;

/// Outcome of offering a candidate to a bounded archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Insertion {
    /// Refused by the non-dominated admission test.
    Rejected,
    /// Admitted and still present (stored last).
    Kept,
    /// Admitted, then chosen as the eviction victim.
    Evicted,
}

/// Non-dominated archive with a maximum size.
///
/// When an admitted candidate pushes the size above `maximum_size`, the
/// density estimator is recomputed over all members and the worst member
/// according to the comparator is removed.
///
/// # Type Parameters
///
/// - `C`: ranking comparator (`Less` = better), e.g. [`CrowdingDistanceComparator`]
/// - `D`: density estimator, e.g. [`CrowdingDistance`]
#[derive(Debug, Clone)]
pub struct BoundedArchive<S, C, D> {
    front: NonDominatedArchive<S>,
    maximum_size: usize,
    comparator: C,
    density_estimator: D,
}

/// Bounded archive evicting the member with the lowest crowding distance.
pub type CrowdingDistanceArchive<S> =
    BoundedArchive<S, CrowdingDistanceComparator, CrowdingDistance>;

impl<S, C, D> BoundedArchive<S, C, D>
where
    S: Solution,
    C: Comparator<S>,
    D: DensityEstimator<S>,
{
    /// Creates an empty archive.
    ///
    /// # Panics
    ///
    /// Panics if `maximum_size` is zero.
    pub fn new(maximum_size: usize, comparator: C, density_estimator: D) -> Self {
        assert!(maximum_size > 0, "maximum_size must be positive");
        Self {
            front: NonDominatedArchive::new(),
            maximum_size,
            comparator,
            density_estimator,
        }
    }

    /// Creates an empty archive from a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn from_config(config: &ArchiveConfig, comparator: C, density_estimator: D) -> Self {
        config.validate().expect("invalid ArchiveConfig");
        Self::new(config.maximum_size, comparator, density_estimator)
    }

    /// Like [`from_config`](Self::from_config) but returns validation errors.
    pub fn try_from_config(
        config: &ArchiveConfig,
        comparator: C,
        density_estimator: D,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::new(config.maximum_size, comparator, density_estimator))
    }

    pub fn maximum_size(&self) -> usize {
        self.maximum_size
    }

    pub fn density_estimator(&self) -> &D {
        &self.density_estimator
    }

    /// Recomputes the density estimate of every member.
    pub fn compute_density_estimator(&mut self) {
        self.density_estimator
            .compute_density_estimator(self.front.solutions_mut());
    }

    pub(crate) fn solutions_mut(&mut self) -> &mut Vec<S> {
        self.front.solutions_mut()
    }

    pub(crate) fn insert(&mut self, solution: S) -> Insertion {
        if !self.front.add(solution) {
            return Insertion::Rejected;
        }
        if self.size() <= self.maximum_size {
            return Insertion::Kept;
        }

        let candidate = self.size() - 1;
        self.compute_density_estimator();
        let worst = find_worst_solution(self.front.solution_list(), &self.comparator);
        self.front.solutions_mut().remove(worst);
        debug!(
            "bounded archive evicted member {worst} (size {}, maximum {})",
            self.size(),
            self.maximum_size
        );

        if worst == candidate {
            Insertion::Evicted
        } else {
            Insertion::Kept
        }
    }
}

impl<S: Solution> CrowdingDistanceArchive<S> {
    /// Creates an archive that evicts the most crowded member.
    ///
    /// # Example
    ///
    /// ```
    /// use u_archive::archive::{Archive, CrowdingDistanceArchive};
    /// use u_archive::solution::BasicSolution;
    ///
    /// let mut archive = CrowdingDistanceArchive::with_crowding_distance(2);
    /// archive.add(BasicSolution::<f64>::from_objectives(vec![0.0, 4.0]));
    /// archive.add(BasicSolution::from_objectives(vec![4.0, 0.0]));
    /// archive.add(BasicSolution::from_objectives(vec![2.0, 2.0]));
    ///
    /// assert_eq!(archive.size(), 2);
    /// assert_eq!(archive.get(0).unwrap().objectives, vec![0.0, 4.0]);
    /// assert_eq!(archive.get(1).unwrap().objectives, vec![4.0, 0.0]);
    /// ```
    pub fn with_crowding_distance(maximum_size: usize) -> Self {
        Self::new(
            maximum_size,
            CrowdingDistanceComparator::default(),
            CrowdingDistance,
        )
    }
}

impl<S, C, D> Archive<S> for BoundedArchive<S, C, D>
where
    S: Solution,
    C: Comparator<S>,
    D: DensityEstimator<S>,
{
    type Comparator = C;

    fn add(&mut self, solution: S) -> bool {
        self.insert(solution) != Insertion::Rejected
    }

    fn solution_list(&self) -> &[S] {
        self.front.solution_list()
    }

    fn comparator(&self) -> &C {
        &self.comparator
    }
}

/// Index of the worst member under `comparator`.
///
/// A member replaces the current worst when the current worst compares
/// `Less` (better) against it. Ties keep the earliest member.
///
/// # Panics
///
/// Panics on an empty list; eviction is only attempted above capacity.
fn find_worst_solution<S, C: Comparator<S>>(solutions: &[S], comparator: &C) -> usize {
    assert!(!solutions.is_empty(), "solution list is empty");

    let mut worst = 0;
    for (i, solution) in solutions.iter().enumerate().skip(1) {
        if comparator.compare(&solutions[worst], solution) == Ordering::Less {
            worst = i;
        }
    }
    worst
}
