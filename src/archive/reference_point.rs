//! Bounded archive biased toward a reference point.

use super::bounded::{BoundedArchive, Insertion};
use super::config::{ArchiveConfig, DEFAULT_ACCEPTANCE_PROBABILITY};
use super::Archive;
use crate::comparator::{dominance, Comparator, CrowdingDistanceComparator, Dominance};
use crate::density::{CrowdingDistance, DensityEstimator};
use crate::solution::Solution;
use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bounded archive that steers its contents toward a region of interest.
///
/// Each candidate is first tested against the reference point:
///
/// - better than the reference point in some objective and worse in none:
///   offered to the bounded archive
/// - worse in some objective and better in none: rejected outright
/// - otherwise (mixed or equal): offered only with probability
///   `acceptance_probability`, or always when the archive is empty.
///   A candidate admitted this way is removed again right after insertion
///   (unless it is the only member or was evicted already), so its only
///   lasting effect is the eviction pass and displacement it triggered.
///
/// The reference point can be moved between calls with
/// [`set_reference_point`](Self::set_reference_point); every `add` re-reads
/// it.
///
/// # Example
///
/// ```
/// use u_archive::archive::{Archive, CrowdingDistanceReferencePointArchive};
/// use u_archive::solution::BasicSolution;
///
/// let mut archive = CrowdingDistanceReferencePointArchive::with_crowding_distance(10, vec![0.5, 0.5]);
///
/// assert!(archive.add(BasicSolution::<f64>::from_objectives(vec![0.2, 0.3])));
/// assert!(!archive.add(BasicSolution::from_objectives(vec![0.8, 0.9])));
/// assert_eq!(archive.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ReferencePointArchive<S, C, D, R = StdRng> {
    archive: BoundedArchive<S, C, D>,
    reference_point: Vec<f64>,
    /// Copy of the first candidate carrying the reference point as objectives.
    reference_solution: Option<S>,
    acceptance_probability: f64,
    rng: R,
}

/// Reference-point archive evicting the member with the lowest crowding distance.
pub type CrowdingDistanceReferencePointArchive<S> =
    ReferencePointArchive<S, CrowdingDistanceComparator, CrowdingDistance>;

impl<S, C, D> ReferencePointArchive<S, C, D, StdRng>
where
    S: Solution,
    C: Comparator<S>,
    D: DensityEstimator<S>,
{
    /// Wraps `archive` with the default acceptance probability and an
    /// entropy-seeded generator.
    pub fn new(archive: BoundedArchive<S, C, D>, reference_point: Vec<f64>) -> Self {
        Self::with_rng(
            archive,
            reference_point,
            DEFAULT_ACCEPTANCE_PROBABILITY,
            StdRng::seed_from_u64(rand::random()),
        )
    }

    /// Builds the archive from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid.
    pub fn from_config(
        config: &ArchiveConfig,
        reference_point: Vec<f64>,
        comparator: C,
        density_estimator: D,
    ) -> Self {
        config.validate().expect("invalid ArchiveConfig");
        Self::build(config, reference_point, comparator, density_estimator)
    }

    /// Like [`from_config`](Self::from_config) but returns validation errors.
    pub fn try_from_config(
        config: &ArchiveConfig,
        reference_point: Vec<f64>,
        comparator: C,
        density_estimator: D,
    ) -> Result<Self, String> {
        config.validate()?;
        Ok(Self::build(
            config,
            reference_point,
            comparator,
            density_estimator,
        ))
    }

    fn build(
        config: &ArchiveConfig,
        reference_point: Vec<f64>,
        comparator: C,
        density_estimator: D,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::with_rng(
            BoundedArchive::new(config.maximum_size, comparator, density_estimator),
            reference_point,
            config.acceptance_probability,
            rng,
        )
    }
}

impl<S: Solution> CrowdingDistanceReferencePointArchive<S> {
    /// Crowding-distance archive biased toward `reference_point`.
    pub fn with_crowding_distance(maximum_size: usize, reference_point: Vec<f64>) -> Self {
        Self::new(
            BoundedArchive::with_crowding_distance(maximum_size),
            reference_point,
        )
    }
}

impl<S, C, D, R> ReferencePointArchive<S, C, D, R>
where
    S: Solution,
    C: Comparator<S>,
    D: DensityEstimator<S>,
    R: Rng,
{
    /// Wraps `archive` with an explicit acceptance probability and generator.
    ///
    /// # Panics
    ///
    /// Panics if `acceptance_probability` is outside `[0, 1]`.
    pub fn with_rng(
        archive: BoundedArchive<S, C, D>,
        reference_point: Vec<f64>,
        acceptance_probability: f64,
        rng: R,
    ) -> Self {
        assert!(
            (0.0..=1.0).contains(&acceptance_probability),
            "acceptance_probability must be in [0, 1], got {acceptance_probability}"
        );
        Self {
            archive,
            reference_point,
            reference_solution: None,
            acceptance_probability,
            rng,
        }
    }

    pub fn reference_point(&self) -> &[f64] {
        &self.reference_point
    }

    /// Moves the reference point. Takes effect on the next `add`.
    pub fn set_reference_point(&mut self, reference_point: &[f64]) {
        self.reference_point.clear();
        self.reference_point.extend_from_slice(reference_point);
    }

    pub fn maximum_size(&self) -> usize {
        self.archive.maximum_size()
    }

    pub fn acceptance_probability(&self) -> f64 {
        self.acceptance_probability
    }

    /// The wrapped bounded archive.
    pub fn bounded(&self) -> &BoundedArchive<S, C, D> {
        &self.archive
    }

    /// Recomputes the density estimate of every member.
    pub fn compute_density_estimator(&mut self) {
        self.archive.compute_density_estimator();
    }
}

impl<S, C, D, R> Archive<S> for ReferencePointArchive<S, C, D, R>
where
    S: Solution,
    C: Comparator<S>,
    D: DensityEstimator<S>,
    R: Rng,
{
    type Comparator = C;

    fn add(&mut self, solution: S) -> bool {
        let reference = self
            .reference_solution
            .get_or_insert_with(|| solution.clone());
        reference.set_objectives(&self.reference_point);

        let mut probationary = false;
        let accept = match dominance(solution.objectives(), reference.objectives()) {
            Dominance::Left => true,
            Dominance::Right => {
                trace!("candidate dominated by the reference point");
                false
            }
            Dominance::Neither => {
                if self.archive.is_empty() {
                    true
                } else if self.rng.random_range(0.0..1.0) < self.acceptance_probability {
                    trace!("candidate admitted on probation");
                    probationary = true;
                    true
                } else {
                    false
                }
            }
        };

        if !accept {
            return false;
        }

        let accepted = match self.archive.insert(solution) {
            Insertion::Rejected => false,
            Insertion::Kept => {
                // The candidate is the last member.
                if probationary && self.archive.size() > 1 {
                    self.archive.solutions_mut().pop();
                }
                true
            }
            Insertion::Evicted => true,
        };

        if accepted && self.archive.size() > self.archive.maximum_size() {
            self.archive.compute_density_estimator();
        }

        accepted
    }

    fn solution_list(&self) -> &[S] {
        self.archive.solution_list()
    }

    fn comparator(&self) -> &C {
        self.archive.comparator()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solution::BasicSolution;

    type Sol = BasicSolution<f64>;
    type TestArchive = CrowdingDistanceReferencePointArchive<Sol>;

    fn sol(objs: &[f64]) -> Sol {
        BasicSolution::from_objectives(objs.to_vec())
    }

    fn archive(maximum_size: usize, reference_point: &[f64], p: f64) -> TestArchive {
        ReferencePointArchive::with_rng(
            BoundedArchive::with_crowding_distance(maximum_size),
            reference_point.to_vec(),
            p,
            StdRng::seed_from_u64(42),
        )
    }

    fn objectives(archive: &TestArchive) -> Vec<Vec<f64>> {
        archive
            .solution_list()
            .iter()
            .map(|s| s.objectives.clone())
            .collect()
    }

    #[test]
    fn test_better_than_reference_accepted() {
        let mut a = archive(10, &[5.0, 5.0], 0.0);
        assert!(a.add(sol(&[1.0, 4.0])));
        assert!(a.add(sol(&[4.0, 1.0])));
        assert_eq!(a.size(), 2);
    }

    #[test]
    fn test_worse_than_reference_rejected() {
        let mut a = archive(10, &[1.0, 1.0], 1.0);
        assert!(!a.add(sol(&[2.0, 3.0])));
        assert!(a.is_empty());
    }

    #[test]
    fn test_equal_to_reference_is_a_tie() {
        let mut a = archive(10, &[1.0, 1.0], 0.0);
        // Empty archive: ties are admitted
        assert!(a.add(sol(&[1.0, 1.0])));
        assert_eq!(a.size(), 1);
    }

    #[test]
    fn test_tie_rejected_with_zero_probability() {
        let mut a = archive(10, &[5.0, 5.0], 0.0);
        a.add(sol(&[1.0, 4.0]));
        assert!(!a.add(sol(&[0.5, 6.0])));
        assert_eq!(objectives(&a), vec![vec![1.0, 4.0]]);
    }

    #[test]
    fn test_probationary_candidate_removed() {
        let mut a = archive(10, &[5.0, 5.0], 1.0);
        a.add(sol(&[0.0, 4.0]));
        a.add(sol(&[4.0, 0.0]));

        assert!(a.add(sol(&[-1.0, 6.0])));
        assert_eq!(objectives(&a), vec![vec![0.0, 4.0], vec![4.0, 0.0]]);
    }

    #[test]
    fn test_probationary_candidate_still_displaces() {
        let mut a = archive(10, &[5.0, 5.0], 1.0);
        assert!(a.add(sol(&[1.0, 7.0]))); // tie, empty archive
        assert!(a.add(sol(&[4.0, 1.0])));

        // Dominates (1,7), then is removed itself
        assert!(a.add(sol(&[0.5, 6.0])));
        assert_eq!(objectives(&a), vec![vec![4.0, 1.0]]);
    }

    #[test]
    fn test_probationary_sole_member_kept() {
        let mut a = archive(10, &[5.0, 5.0], 1.0);
        a.add(sol(&[1.0, 7.0]));

        assert!(a.add(sol(&[0.5, 6.0])));
        assert_eq!(objectives(&a), vec![vec![0.5, 6.0]]);
    }

    #[test]
    fn test_probationary_rejected_by_front() {
        let mut a = archive(10, &[5.0, 5.0], 1.0);
        a.add(sol(&[1.0, 4.0]));
        assert!(!a.add(sol(&[1.0, 6.0])));
        assert_eq!(a.size(), 1);
    }

    #[test]
    fn test_reference_point_is_reread() {
        let mut a = archive(10, &[0.0, 0.0], 0.0);
        assert!(!a.add(sol(&[1.0, 1.0])));

        a.set_reference_point(&[5.0, 5.0]);
        assert_eq!(a.reference_point(), &[5.0, 5.0]);
        assert!(a.add(sol(&[1.0, 1.0])));
    }

    #[test]
    fn test_capacity_enforced() {
        let mut a = archive(3, &[10.0, 10.0], 0.0);
        for i in 0..20 {
            let x = i as f64 / 19.0;
            a.add(sol(&[x, 1.0 - x]));
            assert!(a.size() <= 3);
        }
        assert_eq!(a.size(), 3);
    }

    #[test]
    fn test_random_stream_keeps_invariants() {
        let mut a = archive(8, &[0.5, 0.5], 0.05);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let x: f64 = rng.random_range(0.0..1.0);
            let y: f64 = rng.random_range(0.0..1.0);
            a.add(sol(&[x, y]));
            assert!(a.size() <= a.maximum_size());
        }

        let front = a.solution_list();
        assert!(!front.is_empty());
        for i in 0..front.len() {
            for j in (i + 1)..front.len() {
                assert_eq!(
                    dominance(&front[i].objectives, &front[j].objectives),
                    Dominance::Neither
                );
            }
        }
    }

    #[test]
    fn test_same_seed_same_contents() {
        let config = ArchiveConfig::default()
            .with_maximum_size(5)
            .with_acceptance_probability(0.3)
            .with_seed(11);
        let run = || {
            let mut a: TestArchive = ReferencePointArchive::from_config(
                &config,
                vec![0.5, 0.5],
                CrowdingDistanceComparator::default(),
                CrowdingDistance,
            );
            let mut rng = StdRng::seed_from_u64(3);
            for _ in 0..500 {
                let x: f64 = rng.random_range(0.0..1.0);
                a.add(sol(&[x, rng.random_range(0.0..1.0)]));
            }
            objectives(&a)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn test_accessors() {
        let a = TestArchive::with_crowding_distance(4, vec![1.0, 2.0]);
        assert_eq!(a.maximum_size(), 4);
        assert_eq!(a.reference_point(), &[1.0, 2.0]);
        assert!((a.acceptance_probability() - 0.05).abs() < 1e-15);
        assert!(!a.comparator().lowest_is_best);
        assert_eq!(a.bounded().maximum_size(), 4);
    }

    #[test]
    fn test_try_from_config_rejects_bad_probability() {
        let config = ArchiveConfig::default().with_acceptance_probability(-0.1);
        let result: Result<TestArchive, String> = ReferencePointArchive::try_from_config(
            &config,
            vec![0.0, 0.0],
            CrowdingDistanceComparator::default(),
            CrowdingDistance,
        );
        assert!(result.is_err());
    }
}
