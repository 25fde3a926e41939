//! Unbounded non-dominated archive.

use super::Archive;
use crate::comparator::{Comparator, DominanceComparator, EqualSolutionsComparator};
use crate::solution::Solution;
use log::trace;
use std::cmp::Ordering;

/// Archive that always holds a valid non-dominated front.
///
/// A candidate is admitted when no member dominates it and no member has
/// the same objective vector. Members dominated by an admitted candidate
/// are removed.
///
/// # Complexity
///
/// O(n) dominance tests per `add`, n = current size.
///
/// # Example
///
/// ```
/// use u_archive::archive::{Archive, NonDominatedArchive};
/// use u_archive::solution::BasicSolution;
///
/// let mut archive = NonDominatedArchive::new();
/// assert!(archive.add(BasicSolution::<f64>::from_objectives(vec![1.0, 1.0])));
/// assert!(!archive.add(BasicSolution::from_objectives(vec![2.0, 2.0])));
/// assert_eq!(archive.size(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct NonDominatedArchive<S> {
    solutions: Vec<S>,
    comparator: DominanceComparator,
    equality: EqualSolutionsComparator,
}

impl<S> Default for NonDominatedArchive<S> {
    fn default() -> Self {
        Self {
            solutions: Vec::new(),
            comparator: DominanceComparator,
            equality: EqualSolutionsComparator,
        }
    }
}

impl<S> NonDominatedArchive<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the archive and returns its members.
    pub fn into_solutions(self) -> Vec<S> {
        self.solutions
    }

    pub(crate) fn solutions_mut(&mut self) -> &mut Vec<S> {
        &mut self.solutions
    }
}

impl<S: Solution> Archive<S> for NonDominatedArchive<S> {
    type Comparator = DominanceComparator;

    /// Single scan over the members.
    ///
    /// Members dominated by the candidate are removed as they are met. The
    /// scan stops at the first member that dominates or equals the
    /// candidate; removals made before that point stay in effect.
    fn add(&mut self, solution: S) -> bool {
        if self.solutions.is_empty() {
            self.solutions.push(solution);
            return true;
        }

        let mut index = 0;
        while index < self.solutions.len() {
            match self.comparator.compare(&solution, &self.solutions[index]) {
                Ordering::Less => {
                    self.solutions.remove(index);
                    continue;
                }
                Ordering::Greater => {
                    trace!("candidate dominated by archive member {index}");
                    return false;
                }
                Ordering::Equal => {
                    if self.equality.compare(&solution, &self.solutions[index]) == Ordering::Equal
                    {
                        trace!("candidate duplicates archive member {index}");
                        return false;
                    }
                }
            }
            index += 1;
        }

        self.solutions.push(solution);
        true
    }

    fn solution_list(&self) -> &[S] {
        &self.solutions
    }

    fn comparator(&self) -> &DominanceComparator {
        &self.comparator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::{dominance, Dominance};
    use crate::solution::BasicSolution;

    fn sol(objs: &[f64]) -> BasicSolution<f64> {
        BasicSolution::from_objectives(objs.to_vec())
    }

    fn objectives(archive: &NonDominatedArchive<BasicSolution<f64>>) -> Vec<Vec<f64>> {
        archive
            .solution_list()
            .iter()
            .map(|s| s.objectives.clone())
            .collect()
    }

    #[test]
    fn test_empty_accepts() {
        let mut archive = NonDominatedArchive::new();
        assert!(archive.is_empty());
        assert!(archive.add(sol(&[3.0, 3.0])));
        assert_eq!(archive.size(), 1);
    }

    #[test]
    fn test_mutually_non_dominated_front() {
        let mut archive = NonDominatedArchive::new();
        for objs in [[1.0, 5.0], [2.0, 3.0], [3.0, 2.0], [5.0, 1.0]] {
            assert!(archive.add(sol(&objs)));
        }
        assert_eq!(archive.size(), 4);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut archive = NonDominatedArchive::new();
        assert!(archive.add(sol(&[1.0, 5.0])));
        assert!(!archive.add(sol(&[1.0, 5.0])));
        assert_eq!(archive.size(), 1);
    }

    #[test]
    fn test_dominated_rejected() {
        let mut archive = NonDominatedArchive::new();
        archive.add(sol(&[1.0, 1.0]));
        assert!(!archive.add(sol(&[2.0, 2.0])));
        assert_eq!(objectives(&archive), vec![vec![1.0, 1.0]]);
    }

    #[test]
    fn test_weakly_dominated_rejected() {
        let mut archive = NonDominatedArchive::new();
        archive.add(sol(&[1.0, 2.0]));
        assert!(!archive.add(sol(&[1.0, 3.0])));
        assert_eq!(archive.size(), 1);
    }

    #[test]
    fn test_new_solution_displaces_several() {
        let mut archive = NonDominatedArchive::new();
        archive.add(sol(&[1.0, 5.0]));
        archive.add(sol(&[2.0, 4.0]));
        archive.add(sol(&[4.0, 2.0]));
        archive.add(sol(&[0.5, 6.0]));

        // Dominates (2,4) and (4,2) but not (1,5) or (0.5,6)
        assert!(archive.add(sol(&[1.5, 1.5])));
        assert_eq!(
            objectives(&archive),
            vec![vec![1.0, 5.0], vec![0.5, 6.0], vec![1.5, 1.5]]
        );
    }

    #[test]
    fn test_dominates_everything() {
        let mut archive = NonDominatedArchive::new();
        archive.add(sol(&[1.0, 5.0]));
        archive.add(sol(&[3.0, 3.0]));
        archive.add(sol(&[5.0, 1.0]));
        assert!(archive.add(sol(&[0.0, 0.0])));
        assert_eq!(objectives(&archive), vec![vec![0.0, 0.0]]);
    }

    #[test]
    fn test_appends_in_insertion_order() {
        let mut archive = NonDominatedArchive::new();
        archive.add(sol(&[5.0, 1.0]));
        archive.add(sol(&[1.0, 5.0]));
        assert_eq!(archive.get(0).unwrap().objectives, vec![5.0, 1.0]);
        assert_eq!(archive.get(1).unwrap().objectives, vec![1.0, 5.0]);
        assert!(archive.get(2).is_none());
    }

    #[test]
    fn test_invariant_after_sequence() {
        let mut archive = NonDominatedArchive::new();
        let points = [
            [4.0, 4.0],
            [3.0, 5.0],
            [5.0, 3.0],
            [2.0, 2.0],
            [1.0, 6.0],
            [6.0, 1.0],
            [2.0, 2.0],
            [3.0, 1.5],
        ];
        for p in points {
            archive.add(sol(&p));
        }

        let front = archive.solution_list();
        for i in 0..front.len() {
            for j in (i + 1)..front.len() {
                assert_eq!(
                    dominance(&front[i].objectives, &front[j].objectives),
                    Dominance::Neither
                );
                assert_ne!(front[i].objectives, front[j].objectives);
            }
        }
        assert_eq!(
            objectives(&archive),
            vec![
                vec![2.0, 2.0],
                vec![1.0, 6.0],
                vec![6.0, 1.0],
                vec![3.0, 1.5]
            ]
        );
    }

    #[test]
    fn test_removals_before_rejection_are_kept() {
        // NaN breaks transitivity: the candidate dominates the first member
        // and is dominated by the second
        let mut archive = NonDominatedArchive::new();
        assert!(archive.add(sol(&[f64::NAN, 2.0])));
        assert!(archive.add(sol(&[0.0, f64::NAN])));
        assert_eq!(archive.size(), 2);

        assert!(!archive.add(sol(&[0.5, 1.0])));
        assert_eq!(archive.size(), 1);
        assert_eq!(archive.get(0).unwrap().objectives[0], 0.0);
        assert!(archive.get(0).unwrap().objectives[1].is_nan());
    }

    #[test]
    fn test_into_solutions() {
        let mut archive = NonDominatedArchive::new();
        archive.add(sol(&[1.0, 2.0]));
        let members = archive.into_solutions();
        assert_eq!(members.len(), 1);
    }
}
