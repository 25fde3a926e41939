//! Objective-space equality.

use super::Comparator;
use crate::solution::Solution;
use std::cmp::Ordering;

/// Decides whether two solutions coincide in objective space.
///
/// Returns `Equal` only when both objective vectors have the same length and
/// identical values. Otherwise the first differing objective decides
/// (`Less` when `a` is lower there). Incomparable values such as NaN are
/// never equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EqualSolutionsComparator;

impl<S: Solution> Comparator<S> for EqualSolutionsComparator {
    fn compare(&self, a: &S, b: &S) -> Ordering {
        let (a, b) = (a.objectives(), b.objectives());
        a.iter()
            .zip(b.iter())
            .find_map(|(va, vb)| match va.partial_cmp(vb) {
                Some(Ordering::Equal) => None,
                Some(ord) => Some(ord),
                None => Some(Ordering::Greater),
            })
            .unwrap_or_else(|| a.len().cmp(&b.len()))
    }
}
