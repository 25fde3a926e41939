//! Solution comparators.
//!
//! A [`Comparator`] is a three-way comparison over solutions. `Less` means
//! the first operand is *better* under that comparator's criterion.
//!
//! - [`DominanceComparator`]: Pareto dominance (minimization)
//! - [`EqualSolutionsComparator`]: objective-space equality, used to reject duplicates
//! - [`CrowdingDistanceComparator`]: ranks by the crowding-distance slot,
//!   used by bounded archives to pick eviction candidates
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic Algorithm: NSGA-II"
//! - Durillo & Nebro (2011), "jMetal: A Java framework for multi-objective optimization"

mod attribute;
mod dominance;
mod equality;

use std::cmp::Ordering;

pub use attribute::CrowdingDistanceComparator;
pub use dominance::{dominance, Dominance, DominanceComparator};
pub use equality::EqualSolutionsComparator;

/// Three-way comparison between two solutions.
///
/// Returns `Less` when `a` is better than `b`, `Greater` when `b` is better,
/// and `Equal` when the comparator cannot tell them apart.
pub trait Comparator<S> {
    fn compare(&self, a: &S, b: &S) -> Ordering;
}
