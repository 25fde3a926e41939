//! Solution abstraction seen by the archives.
//!
//! Archives only look at the objective vector and the crowding-distance
//! slot. Decision variables stay opaque.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A candidate solution stored in an archive.
///
/// Lower objective values are better (minimization).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Route {
///     stops: Vec<usize>,
///     objectives: Vec<f64>,
///     crowding: Option<f64>,
/// }
///
/// impl Solution for Route {
///     fn objectives(&self) -> &[f64] { &self.objectives }
///     fn set_objectives(&mut self, values: &[f64]) {
///         self.objectives.clear();
///         self.objectives.extend_from_slice(values);
///     }
///     fn crowding_distance(&self) -> Option<f64> { self.crowding }
///     fn set_crowding_distance(&mut self, d: f64) { self.crowding = Some(d); }
/// }
/// ```
pub trait Solution: Clone {
    /// Objective values, one per objective. The length is fixed per problem.
    fn objectives(&self) -> &[f64];

    /// Overwrites the objective values.
    ///
    /// Archives only call this on their own internal copies (the
    /// reference-point proxy), never on solutions they store.
    fn set_objectives(&mut self, values: &[f64]);

    /// Crowding distance assigned by the last density estimation, if any.
    fn crowding_distance(&self) -> Option<f64>;

    /// Stores a crowding distance.
    fn set_crowding_distance(&mut self, distance: f64);

    /// Number of objectives.
    fn number_of_objectives(&self) -> usize {
        self.objectives().len()
    }
}

/// General-purpose solution record.
///
/// Carries decision variables of any type next to the objective vector
/// and the crowding-distance slot.
///
/// # Examples
///
/// ```
/// use u_archive::solution::{BasicSolution, Solution};
///
/// let s = BasicSolution::new(vec![0.25, 0.75], vec![1.0, 3.0]);
/// assert_eq!(s.objectives(), &[1.0, 3.0]);
/// assert!(s.crowding_distance().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BasicSolution<V> {
    /// Decision variables. Never read by the archives.
    pub variables: Vec<V>,

    /// Objective values (minimized).
    pub objectives: Vec<f64>,

    /// Crowding distance, set by [`CrowdingDistance`](crate::density::CrowdingDistance).
    pub crowding_distance: Option<f64>,
}

impl<V> BasicSolution<V> {
    /// Creates a solution with decision variables and evaluated objectives.
    pub fn new(variables: Vec<V>, objectives: Vec<f64>) -> Self {
        Self {
            variables,
            objectives,
            crowding_distance: None,
        }
    }

    /// Creates a solution that only carries objective values.
    pub fn from_objectives(objectives: Vec<f64>) -> Self {
        Self::new(Vec::new(), objectives)
    }
}

impl<V: Clone> Solution for BasicSolution<V> {
    fn objectives(&self) -> &[f64] {
        &self.objectives
    }

    fn set_objectives(&mut self, values: &[f64]) {
        self.objectives.clear();
        self.objectives.extend_from_slice(values);
    }

    fn crowding_distance(&self) -> Option<f64> {
        self.crowding_distance
    }

    fn set_crowding_distance(&mut self, distance: f64) {
        self.crowding_distance = Some(distance);
    }
}
