//! Solution archives.
//!
//! Archives collect candidates from a search process and keep a
//! non-dominated approximation of the Pareto front. The outer loop only
//! talks to them through the [`Archive`] trait.
//!
//! # Key Types
//!
//! - [`NonDominatedArchive`]: unbounded; rejects dominated and duplicate candidates
//! - [`BoundedArchive`]: adds a capacity and density-driven eviction
//! - [`CrowdingDistanceArchive`]: bounded archive using crowding distance
//! - [`ReferencePointArchive`]: bounded archive biased toward a reference point
//! - [`CrowdingDistanceReferencePointArchive`]: reference-point archive using crowding distance
//!
//! # Composition
//!
//! ```text
//! candidate ──> NonDominatedArchive ──> BoundedArchive ──> ReferencePointArchive
//!               (admission)            (eviction)         (region bias)
//! ```
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective GA: NSGA-II"
//! - Nebro et al. (2009), "MOCell: A cellular genetic algorithm for multiobjective optimization"
//! - Deb et al. (2006), "Reference point based multi-objective optimization using
//!   evolutionary algorithms"

mod bounded;
mod config;
mod non_dominated;
mod reference_point;

pub use bounded::{BoundedArchive, CrowdingDistanceArchive};
pub use config::{ArchiveConfig, DEFAULT_ACCEPTANCE_PROBABILITY};
pub use non_dominated::NonDominatedArchive;
pub use reference_point::{CrowdingDistanceReferencePointArchive, ReferencePointArchive};

use crate::comparator::Comparator;

/// Common interface of all archives.
///
/// `add` returning `false` is ordinary control flow (dominated, duplicate,
/// or randomly rejected candidate), not an error.
pub trait Archive<S> {
    /// Comparator the archive ranks its members with.
    type Comparator: Comparator<S>;

    /// Offers a candidate. Returns whether it was admitted.
    fn add(&mut self, solution: S) -> bool;

    /// Current members, in archive order.
    fn solution_list(&self) -> &[S];

    /// The configured ranking comparator.
    fn comparator(&self) -> &Self::Comparator;

    /// Member at `index`, or `None` when out of range.
    fn get(&self, index: usize) -> Option<&S> {
        self.solution_list().get(index)
    }

    fn size(&self) -> usize {
        self.solution_list().len()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
