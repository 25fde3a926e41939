//! Bounded Pareto archives for multi-objective metaheuristics.
//!
//! An archive collects candidate solutions produced by a search process
//! (GA, NSGA-II, MOCell, ...) and keeps, after every insertion, a
//! non-dominated and diverse approximation of the Pareto front.
//!
//! - **Non-dominated archive**: unbounded admission gatekeeper. A candidate
//!   enters only if no member dominates or duplicates it, and it removes
//!   every member it dominates.
//! - **Bounded archive**: caps the size and evicts the least diverse member
//!   according to a density estimator and a ranking comparator.
//! - **Crowding distance archive**: bounded archive preconfigured with the
//!   NSGA-II crowding distance.
//! - **Reference-point archive**: biases the bounded archive toward a
//!   region of objective space chosen by the caller.
//!
//! All objectives are **minimized**.
//!
//! # Architecture
//!
//! Archives are built by composition: the bounded archive owns a
//! non-dominated archive, and the reference-point archive owns a bounded
//! archive. Ranking and density are pluggable through the
//! [`comparator::Comparator`] and [`density::DensityEstimator`] traits.
//!
//! # Example
//!
//! ```
//! use u_archive::archive::{Archive, CrowdingDistanceArchive};
//! use u_archive::solution::BasicSolution;
//!
//! let mut archive = CrowdingDistanceArchive::with_crowding_distance(2);
//! archive.add(BasicSolution::<f64>::from_objectives(vec![0.0, 4.0]));
//! archive.add(BasicSolution::from_objectives(vec![4.0, 0.0]));
//! archive.add(BasicSolution::from_objectives(vec![2.0, 2.0]));
//!
//! assert_eq!(archive.size(), 2);
//! ```

pub mod archive;
pub mod comparator;
pub mod density;
pub mod solution;
