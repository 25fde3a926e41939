//! Pareto dominance.

use super::Comparator;
use crate::solution::Solution;
use std::cmp::Ordering;

/// Dominance relation between two objective vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other (incomparable or equal).
    Neither,
}

/// Compares two objective vectors for Pareto dominance (minimization).
///
/// `a` dominates `b` when it is no worse in every objective and strictly
/// better in at least one. Identical vectors yield [`Dominance::Neither`].
///
/// # Examples
///
/// ```
/// use u_archive::comparator::{dominance, Dominance};
///
/// assert_eq!(dominance(&[1.0, 1.0], &[2.0, 2.0]), Dominance::Left);
/// assert_eq!(dominance(&[1.0, 3.0], &[3.0, 1.0]), Dominance::Neither);
/// ```
pub fn dominance(a: &[f64], b: &[f64]) -> Dominance {
    debug_assert_eq!(
        a.len(),
        b.len(),
        "objective vectors must have the same length"
    );

    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va < vb {
            a_better_in_some = true;
        } else if vb < va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Pareto dominance comparator.
///
/// `Less` if the first solution dominates the second, `Greater` if the
/// second dominates the first, `Equal` otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DominanceComparator;

impl<S: Solution> Comparator<S> for DominanceComparator {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        match dominance(a.objectives(), b.objectives()) {
            Dominance::Left => Ordering::Less,
            Dominance::Right => Ordering::Greater,
            Dominance::Neither => Ordering::Equal,
        }
    }
}
